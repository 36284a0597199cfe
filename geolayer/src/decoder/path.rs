use std::fmt::{Display, Formatter};

/// Location of a node inside a JSON document, displayed as `$.features[2].geometry.coordinates[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPath(Vec<PathSegment>);

/// One step of a [`JsonPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Member of an object.
    Key(String),
    /// Element of an array.
    Index(usize),
}

impl JsonPath {
    /// Path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Segments of the path from the root.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns the path extended with an object member.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    /// Returns the path extended with an array index.
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

/// Borrowed path used while walking the document. It lives on the stack and is turned into an owned
/// [`JsonPath`] only when an error is reported.
#[derive(Debug, Clone, Copy)]
pub(super) enum Scope<'a> {
    Root,
    Key(&'a Scope<'a>, &'a str),
    Index(&'a Scope<'a>, usize),
}

impl<'a> Scope<'a> {
    pub(super) fn key(&'a self, key: &'a str) -> Scope<'a> {
        Scope::Key(self, key)
    }

    pub(super) fn index(&'a self, index: usize) -> Scope<'a> {
        Scope::Index(self, index)
    }

    pub(super) fn to_path(self) -> JsonPath {
        match self {
            Scope::Root => JsonPath::root(),
            Scope::Key(parent, key) => parent.to_path().key(key),
            Scope::Index(parent, index) => parent.to_path().index(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display() {
        assert_eq!(JsonPath::root().to_string(), "$");

        let root = Scope::Root;
        let features = root.key("features");
        let feature = features.index(2);
        let geometry = feature.key("geometry");
        assert_eq!(
            geometry.to_path().to_string(),
            "$.features[2].geometry"
        );
        assert_eq!(geometry.to_path().segments().len(), 3);
    }
}
