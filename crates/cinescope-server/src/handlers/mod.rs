pub mod favorites;
pub mod movies;
pub mod search;

use serde::Deserialize;

/// `?page=` as sent by the browser; anything unparsable falls back to page 1
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn parsed(&self) -> Option<u32> {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
    }

    pub fn page_or_first(&self) -> u32 {
        self.parsed().unwrap_or(1)
    }
}
