#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum Page {
    #[default]
    Servers,
    Config,
    Themes,
}
