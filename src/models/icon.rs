/// Reference to one of the illustrations bundled under `static/img/`.
///
/// The markup is embedded at compile time, so a missing file fails the
/// build instead of producing a broken page.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Icon {
    Mountain,
    Tree,
    React,
}

impl Icon {
    pub fn svg(&self) -> &'static str {
        match self {
            Self::Mountain => include_str!("../../static/img/undraw_docusaurus_mountain.svg"),
            Self::Tree => include_str!("../../static/img/undraw_docusaurus_tree.svg"),
            Self::React => include_str!("../../static/img/undraw_docusaurus_react.svg"),
        }
    }
}
