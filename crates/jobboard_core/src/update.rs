use jobboard_logging::{jb_debug, jb_warn};

use crate::{Effect, Msg, WidgetState, SEARCH_DEBOUNCE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => vec![state.begin_list_load()],
        Msg::SearchInput(raw) => {
            if !state.search_visible() {
                return (state, Vec::new());
            }
            let generation = state.record_search_input(raw);
            vec![Effect::ScheduleSearch {
                generation,
                delay: SEARCH_DEBOUNCE,
            }]
        }
        Msg::SearchSettled { generation } => {
            if state.settle_search(generation) {
                vec![state.begin_list_load()]
            } else {
                jb_debug!("Dropping superseded search timer generation={}", generation);
                Vec::new()
            }
        }
        Msg::PageClicked(target) => {
            let current = state.browse().page;
            let in_range = (1..=state.total_pages()).contains(&target);
            if !state.has_job_cards() || !in_range || target == current {
                return (state, Vec::new());
            }
            state.set_page(target);
            vec![state.begin_list_load()]
        }
        Msg::ViewDetailsClicked(job_id) => {
            if !state.has_job_cards() {
                return (state, Vec::new());
            }
            state.set_search_visible(false);
            vec![state.begin_detail_load(job_id)]
        }
        Msg::BackClicked => {
            if !state.has_rendered_detail() {
                return (state, Vec::new());
            }
            state.set_search_visible(true);
            vec![state.begin_list_load()]
        }
        Msg::ListLoaded { request, result } => {
            if let Err(err) = &result {
                jb_warn!("Error fetching jobs (request {}): {}", request.0, err);
            }
            if !state.apply_list(request, result) {
                jb_debug!("Ignoring stale list response request={}", request.0);
            }
            Vec::new()
        }
        Msg::DetailLoaded { request, result } => {
            if let Err(err) = &result {
                jb_warn!("Error fetching job details (request {}): {}", request.0, err);
            }
            if !state.apply_detail(request, result) {
                let view = state.browse().view;
                jb_debug!(
                    "Ignoring stale detail response request={} view={:?}",
                    request.0,
                    view
                );
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::update;
    use crate::{Msg, View, WidgetConfig, WidgetState};

    #[test]
    fn back_is_ignored_without_rendered_detail() {
        let config = WidgetConfig::new("https://example.com/jobs", 5).unwrap();
        let state = WidgetState::new(config);
        let (state, _) = update(state, Msg::Mounted);
        let (state, effects) = update(state, Msg::BackClicked);

        assert!(effects.is_empty());
        assert_eq!(state.browse().view, View::List);
    }
}
