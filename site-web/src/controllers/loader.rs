//! Header/footer fragment loader.
//!
//! Both fragments are requested at once. Each one replaces its region as
//! soon as it arrives; the header's arrival is what makes the mobile menu
//! bindable, so the caller gets a hook for it.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::FetchError;

/// Where markup fragments are fetched from.
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError>;
}

/// A page region whose content is replaced by a fragment.
pub trait Region {
    fn replace_content(&self, html: &str);
}

pub struct ComponentLoader<R> {
    source: Rc<dyn FragmentSource>,
    header: Option<(R, String)>,
    footer: Option<(R, String)>,
}

impl<R: Region> ComponentLoader<R> {
    pub fn new(source: Rc<dyn FragmentSource>) -> Self {
        Self {
            source,
            header: None,
            footer: None,
        }
    }

    pub fn header(mut self, region: Option<R>, path: impl Into<String>) -> Self {
        self.header = region.map(|region| (region, path.into()));
        self
    }

    pub fn footer(mut self, region: Option<R>, path: impl Into<String>) -> Self {
        self.footer = region.map(|region| (region, path.into()));
        self
    }

    /// Fetch both fragments concurrently. `on_header` runs right after the
    /// header has been injected, and never if the header failed to load.
    pub async fn load(&self, on_header: impl FnOnce()) {
        let header = async move {
            match &self.header {
                Some((region, path)) => {
                    if self.inject(region, path).await {
                        on_header();
                    }
                }
                None => log::warn!("no <header> region on the page; skipping header fragment"),
            }
        };

        let footer = async {
            match &self.footer {
                Some((region, path)) => {
                    self.inject(region, path).await;
                }
                None => log::warn!("no <footer> region on the page; skipping footer fragment"),
            }
        };

        futures::join!(header, footer);
    }

    async fn inject(&self, region: &R, path: &str) -> bool {
        match self.source.fetch_fragment(path).await {
            Ok(html) => {
                region.replace_content(&html);
                log::debug!("loaded fragment {}", path);
                true
            }
            Err(e) => {
                log::error!("Error loading fragment {}: {}", path, e);
                false
            }
        }
    }
}
