pub mod activations;
mod forest;
pub mod layers;
mod model;
mod sequential;

pub use forest::{Forest, Node, Tree};
pub use model::Model;
pub use sequential::Sequential;
