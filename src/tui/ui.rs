use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, LoadState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorView, Header, LoadingView, PostList};

const SEARCH_HEIGHT: u16 = 3;

/// Splits the screen into header, search box and list areas.
fn ready_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(SEARCH_HEIGHT), Min(0)]).areas(area)
}

/// Composes the screen from the load state, the filtered view and the
/// highlighted id. The search box and list only exist once data is ready.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();

    match &app.load_state {
        LoadState::Loading => {
            LoadingView::new(spinner_frame).render(frame, area);
        }
        LoadState::Error(message) => {
            ErrorView::new(message).render(frame, area);
        }
        LoadState::Ready => {
            let [header_area, search_area, list_area] = ready_layout(area);

            Header::new(Some((app.filtered.len(), app.dataset.len()))).render(frame, header_area);
            tui.search_box.render(frame, search_area);
            PostList::new(&mut tui.post_list, &app.filtered, app.highlighted)
                .render(frame, list_area);
        }
    }
}
