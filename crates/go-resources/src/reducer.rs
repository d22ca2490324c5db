use crate::actions::{Action, GlobalAction};
use crate::reducers::menu_reducer;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.menu = menu_reducer::reduce(state.menu, action, state.catalog.count());

    state
}
