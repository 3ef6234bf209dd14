use super::{AssertOption, AssertOptions, MethodsComparisonMode};

/// Configuration of one comparison run
///
/// Every assertion owns its settings. Nested comparisons see the settings of the assertion that
/// started them but can never modify them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Parts of the nodes to skip
    pub options: AssertOptions,

    /// How methods of classes get matched up (only relevant for class comparisons)
    pub methods_comparison_mode: MethodsComparisonMode,
}

impl Settings {
    pub fn new() -> Settings {
        Settings {
            options: AssertOptions::new(),
            methods_comparison_mode: MethodsComparisonMode::OneByOne,
        }
    }

    pub fn has_option(&self, option: AssertOption) -> bool {
        self.options.contains(option)
    }
}
