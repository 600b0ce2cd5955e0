//! Dojo Legal mining landing page.
//!
//! Library root so browser tests under `tests/` can mount individual
//! components. The wasm entry point lives in `main.rs`.

pub mod config;
pub mod content;
pub mod disclosure;
pub mod theme;

pub mod components {
    pub mod disclosure_list;
    pub mod reveal;
}

pub mod pages {
    pub mod about;
    pub mod benefits;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod landing;
    pub mod mission;
    pub mod services;
}
