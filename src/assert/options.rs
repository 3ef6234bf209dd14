use super::ConfigurationError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Option which makes a comparison skip part of the nodes
///
/// Options apply to the node they are set on and everything reachable from it: setting
/// `IgnoreName` on a class comparison also ignores the names of its methods and fields.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AssertOption {
    IgnoreName,
    IgnoreDescriptor,
    IgnoreAccess,
    IgnoreSignature,

    /// Field initial values
    IgnoreValue,
    IgnoreVisibleAnnotations,
    IgnoreInvisibleAnnotations,
    IgnoreVisibleTypeAnnotations,
    IgnoreInvisibleTypeAnnotations,
    IgnoreAttributes,

    /// Compare annotations by their type only
    IgnoreAnnotationValues,

    IgnoreVersion,
    IgnoreSuperName,
    IgnoreInterfaces,
    IgnoreSourceFile,
    IgnoreSourceDebug,
    IgnoreOuterClass,
    IgnoreOuterMethod,
    IgnoreOuterMethodDescriptor,
    IgnoreInnerClasses,
    IgnoreNestHostClass,
    IgnoreNestMembers,
    IgnorePermittedSubclasses,
    IgnoreFields,
    IgnoreMethods,

    IgnoreExceptions,
    IgnoreParameters,
    IgnoreVisibleAnnotableParameterCount,
    IgnoreInvisibleAnnotableParameterCount,
    IgnoreVisibleParameterAnnotations,
    IgnoreInvisibleParameterAnnotations,
    IgnoreInstructions,
    IgnoreTryCatchBlocks,
    IgnoreMaxLocals,
    IgnoreMaxStack,
    IgnoreLocalVariables,
    IgnoreVisibleLocalVariableAnnotations,
    IgnoreInvisibleLocalVariableAnnotations,
    IgnoreAnnotationDefault,

    /// Drop line numbers (and the labels only used by them) before comparing instructions
    IgnoreLineNumbers,

    /// Caller defined option, for custom representations or comparators to react to
    Custom(&'static str),
}

/// Set of options
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct AssertOptions(BTreeSet<AssertOption>);

impl AssertOptions {
    pub fn new() -> AssertOptions {
        AssertOptions::default()
    }

    pub fn contains(&self, option: AssertOption) -> bool {
        self.0.contains(&option)
    }

    /// Copy of the set with the option added
    pub fn with(&self, option: AssertOption) -> AssertOptions {
        let mut options = self.clone();
        options.0.insert(option);
        options
    }

    pub fn insert(&mut self, option: AssertOption) {
        self.0.insert(option);
    }

    pub fn iter(&self) -> impl Iterator<Item = AssertOption> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<AssertOption> for AssertOptions {
    fn from_iter<I: IntoIterator<Item = AssertOption>>(iter: I) -> AssertOptions {
        AssertOptions(iter.into_iter().collect())
    }
}

impl Extend<AssertOption> for AssertOptions {
    fn extend<I: IntoIterator<Item = AssertOption>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// How the methods of two classes get compared
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum MethodsComparisonMode {
    /// Compare only the declarations (name and descriptor), as an unordered multiset
    DeclarationsOnly,

    /// Pair up methods by declaration, then compare every pair field by field
    #[default]
    OneByOne,

    /// Compare the whole lists as unordered multisets of methods
    Full,
}

impl FromStr for MethodsComparisonMode {
    type Err = ConfigurationError;

    fn from_str(mode: &str) -> Result<MethodsComparisonMode, ConfigurationError> {
        match mode.to_ascii_lowercase().replace('_', "-").as_str() {
            "declarations-only" => Ok(MethodsComparisonMode::DeclarationsOnly),
            "one-by-one" => Ok(MethodsComparisonMode::OneByOne),
            "full" => Ok(MethodsComparisonMode::Full),
            _ => Err(ConfigurationError::UnknownComparisonMode(mode.to_owned())),
        }
    }
}

impl fmt::Display for MethodsComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MethodsComparisonMode::DeclarationsOnly => "declarations-only",
            MethodsComparisonMode::OneByOne => "one-by-one",
            MethodsComparisonMode::Full => "full",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_comparison_mode() {
        assert_eq!(
            "ONE_BY_ONE".parse::<MethodsComparisonMode>().unwrap(),
            MethodsComparisonMode::OneByOne
        );
        assert_eq!(
            "declarations-only".parse::<MethodsComparisonMode>().unwrap(),
            MethodsComparisonMode::DeclarationsOnly
        );
        match "pairwise".parse::<MethodsComparisonMode>() {
            Err(ConfigurationError::UnknownComparisonMode(mode)) => assert_eq!(mode, "pairwise"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn with_does_not_touch_original() {
        let options = AssertOptions::new();
        let extended = options.with(AssertOption::IgnoreName);
        assert!(!options.contains(AssertOption::IgnoreName));
        assert!(extended.contains(AssertOption::IgnoreName));
    }
}
