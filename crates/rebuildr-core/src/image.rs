use std::fmt;

/// Reference of a container image: `registry/name:tag`, registry optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub registry: Option<String>,
    pub name: String,
    pub tag: String,
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.registry {
            Some(registry) => {
                let registry = registry.trim_end_matches('/');
                write!(f, "{registry}/{name}:{tag}", name = self.name, tag = self.tag)
            }
            None => write!(f, "{name}:{tag}", name = self.name, tag = self.tag),
        }
    }
}
