/// Events posted to the Elm-architecture event loop by background tasks.
/// Terminal input and ticks arrive through their own `select!` arms.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A generation sub-flow settled (success or failure); redraw.
    GenerationSettled,
}
