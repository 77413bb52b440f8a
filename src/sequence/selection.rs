use crate::foundation::error::CountdownResult;
use crate::style::registry::StyleRegistry;

/// Style argument of the driver: one registry name, or `all` of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleSelection {
    /// Every style in the registry.
    All,
    /// A single style by name.
    One(String),
}

impl StyleSelection {
    /// `all` (any case) selects every style; anything else is a name.
    pub fn parse(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::One(arg.to_owned())
        }
    }

    /// Names to render, in registry order for `All`.
    pub fn resolve(&self, registry: &StyleRegistry) -> CountdownResult<Vec<String>> {
        match self {
            Self::All => Ok(registry.list().into_iter().map(str::to_owned).collect()),
            Self::One(name) => {
                registry.get(name)?;
                Ok(vec![name.clone()])
            }
        }
    }
}

impl std::str::FromStr for StyleSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
