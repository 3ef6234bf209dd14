use super::AssertionFailure;

/// Path of descriptions from the root of a comparison down to the current check
///
/// Crumbs are cheap to extend and never shared mutably: each nested check gets its own copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Crumbs(Vec<String>);

impl Crumbs {
    pub fn root(description: impl Into<String>) -> Crumbs {
        Crumbs(vec![description.into()])
    }

    /// Crumbs for a nested check
    pub fn push(&self, description: impl Into<String>) -> Crumbs {
        let mut crumbs = self.0.clone();
        crumbs.push(description.into());
        log::trace!("Entering {}", crumbs.join(" > "));
        Crumbs(crumbs)
    }

    /// Crumbs for the check of a named field (`Has equal <field>`)
    pub fn field(&self, field: &str) -> Crumbs {
        self.push(format!("Has equal {}", field))
    }

    pub fn fail(&self, message: impl Into<String>) -> AssertionFailure {
        AssertionFailure {
            crumbs: self.0.clone(),
            message: message.into(),
            comparator: None,
        }
    }

    pub fn fail_using(&self, message: impl Into<String>, comparator: &str) -> AssertionFailure {
        AssertionFailure {
            crumbs: self.0.clone(),
            message: message.into(),
            comparator: Some(comparator.to_owned()),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
