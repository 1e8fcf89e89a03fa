use jobboard_core::markup::{render_list_region, render_pagination};
use jobboard_core::WidgetViewModel;

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionCommand {
    SetHtml { region: &'static str, html: String },
    SetVisible { region: &'static str, visible: bool },
}

pub fn render(view: &WidgetViewModel) -> Vec<RegionCommand> {
    vec![
        RegionCommand::SetHtml {
            region: REGION_JOB_LIST,
            html: render_list_region(&view.region),
        },
        RegionCommand::SetHtml {
            region: REGION_PAGINATION,
            html: render_pagination(&view.pagination),
        },
        RegionCommand::SetVisible {
            region: REGION_SEARCH,
            visible: view.search_visible,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{render, RegionCommand};
    use crate::platform::ui::constants::{REGION_JOB_LIST, REGION_PAGINATION, REGION_SEARCH};
    use jobboard_core::{update, Msg, WidgetConfig, WidgetState};

    #[test]
    fn loading_view_clears_pagination() {
        let config = WidgetConfig::new("https://example.com/jobs", 5).unwrap();
        let (state, _) = update(WidgetState::new(config), Msg::Mounted);
        let commands = render(&state.view());

        assert_eq!(
            commands,
            vec![
                RegionCommand::SetHtml {
                    region: REGION_JOB_LIST,
                    html: r#"<h3 class="mx-auto">Loading jobs...</h3>"#.to_string(),
                },
                RegionCommand::SetHtml {
                    region: REGION_PAGINATION,
                    html: String::new(),
                },
                RegionCommand::SetVisible {
                    region: REGION_SEARCH,
                    visible: true,
                },
            ]
        );
    }
}
