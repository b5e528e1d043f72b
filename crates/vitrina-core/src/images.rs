use std::fmt;

/// Opaque reference to a gallery image.
///
/// The slideshow never inspects the contents; resolution to a URL happens
/// at display time through an [`AssetResolver`](crate::AssetResolver).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ImageRef {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Supplies the ordered image list for a slideshow session.
pub trait ImageSource: Send + Sync {
    fn images(&self) -> Vec<ImageRef>;
}

/// Fixed image list, the common case for a curated gallery page.
#[derive(Clone, Debug, Default)]
pub struct StaticImages {
    images: Vec<ImageRef>,
}

impl StaticImages {
    #[must_use]
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: paths.into_iter().map(ImageRef::new).collect(),
        }
    }
}

impl ImageSource for StaticImages {
    fn images(&self) -> Vec<ImageRef> {
        self.images.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_preserves_order() {
        let source = StaticImages::from_paths(["a.jpg", "b.jpg", "c.jpg"]);
        let images = source.images();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].as_str(), "a.jpg");
        assert_eq!(images[2].as_str(), "c.jpg");
    }

    #[test]
    fn empty_source_yields_empty_list() {
        let source = StaticImages::default();
        assert!(source.images().is_empty());
    }
}
