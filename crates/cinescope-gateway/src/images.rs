//! Absolute image URL construction.
//!
//! Upstream only returns relative paths like `/a.jpg`. A URL is built by plain
//! concatenation of base, size and path; a missing or empty path stays `None`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W185,
    W500,
    W1280,
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W500 => "w500",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

pub const POSTER_SIZE: ImageSize = ImageSize::W500;
pub const BACKDROP_SIZE: ImageSize = ImageSize::W1280;
pub const PROFILE_SIZE: ImageSize = ImageSize::W185;
pub const LOGO_SIZE: ImageSize = ImageSize::W185;

#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        match path {
            Some(p) if !p.is_empty() => Some(format!("{}/{}{}", self.base_url, size.as_str(), p)),
            _ => None,
        }
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.url(path, POSTER_SIZE)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.url(path, BACKDROP_SIZE)
    }

    pub fn profile(&self, path: Option<&str>) -> Option<String> {
        self.url(path, PROFILE_SIZE)
    }

    pub fn logo(&self, path: Option<&str>) -> Option<String> {
        self.url(path, LOGO_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        let images = ImageUrlBuilder::new("https://image.tmdb.org/t/p");
        assert_eq!(
            images.poster(Some("/a.jpg")),
            Some("https://image.tmdb.org/t/p/w500/a.jpg".to_string())
        );
        assert_eq!(
            images.backdrop(Some("/b.jpg")),
            Some("https://image.tmdb.org/t/p/w1280/b.jpg".to_string())
        );
        assert_eq!(
            images.profile(Some("/c.jpg")),
            Some("https://image.tmdb.org/t/p/w185/c.jpg".to_string())
        );
    }

    #[test]
    fn test_missing_path_stays_none() {
        let images = ImageUrlBuilder::new("https://image.tmdb.org/t/p");
        assert_eq!(images.poster(None), None);
        assert_eq!(images.poster(Some("")), None);
        assert_eq!(images.profile(None), None);
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let images = ImageUrlBuilder::new("http://img.local/t/p/");
        assert_eq!(
            images.url(Some("/x.png"), ImageSize::Original),
            Some("http://img.local/t/p/original/x.png".to_string())
        );
    }
}
