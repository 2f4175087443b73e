/// Marker trait for intents: user actions (key presses) and system events
/// (request settled) that a reducer consumes.
pub trait Intent: Send + 'static {}
