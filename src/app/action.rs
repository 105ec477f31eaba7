#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the dynamic area with `count` buttons, plus a trailing
    /// spacing when `spacer` is set.
    Rebuild { count: usize, spacer: bool },
    Quit,
}
