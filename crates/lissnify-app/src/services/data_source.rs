//! Content source trait and the bundle it produces

use lissnify_core::prelude::*;
use lissnify_core::{CarouselId, Category, Listener, Step, Testimonial};

/// Everything the deck renders, fetched in one go
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckContent {
    pub categories: Vec<Category>,
    pub testimonials: Vec<Testimonial>,
    pub steps: Vec<Step>,
    pub listeners: Vec<Listener>,
}

impl DeckContent {
    /// Number of items destined for a carousel
    pub fn len_of(&self, id: CarouselId) -> usize {
        match id {
            CarouselId::Categories => self.categories.len(),
            CarouselId::Testimonials => self.testimonials.len(),
            CarouselId::Steps => self.steps.len(),
            CarouselId::Listeners => self.listeners.len(),
        }
    }

    pub fn total(&self) -> usize {
        CarouselId::ALL.iter().map(|id| self.len_of(*id)).sum()
    }
}

/// Source of carousel content
#[trait_variant::make(DataSource: Send)]
pub trait LocalDataSource {
    /// Short label for the status bar ("api.lissnify.com", "offline")
    fn label(&self) -> String;

    async fn categories(&self) -> Result<Vec<Category>>;

    async fn testimonials(&self) -> Result<Vec<Testimonial>>;

    async fn listeners(&self) -> Result<Vec<Listener>>;

    async fn steps(&self) -> Result<Vec<Step>>;
}
