mod dispatcher;
mod events;

pub use dispatcher::{Collaborators, InteractionDispatcher};
pub use events::{DispatchOutcome, Interaction};
