pub mod orchestrator;
pub mod slideshow;

pub use orchestrator::Orchestrator;
pub use slideshow::SlideshowWorker;
