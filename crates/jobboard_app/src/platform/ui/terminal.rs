use std::collections::HashMap;
use std::io::{self, Write};

use super::render::RegionCommand;

/// Prints region updates, skipping regions whose content did not change.
pub struct TerminalSurface<W: Write> {
    out: W,
    html: HashMap<&'static str, String>,
    visible: HashMap<&'static str, bool>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            html: HashMap::new(),
            visible: HashMap::new(),
        }
    }

    pub fn apply(&mut self, commands: Vec<RegionCommand>) -> io::Result<()> {
        for command in commands {
            match command {
                RegionCommand::SetHtml { region, html } => {
                    if self.html.get(region) == Some(&html) {
                        continue;
                    }
                    writeln!(self.out, "--- #{region} ---")?;
                    if !html.is_empty() {
                        writeln!(self.out, "{html}")?;
                    }
                    self.html.insert(region, html);
                }
                RegionCommand::SetVisible { region, visible } => {
                    if self.visible.insert(region, visible) == Some(visible) {
                        continue;
                    }
                    let state = if visible { "shown" } else { "hidden" };
                    writeln!(self.out, "--- #{region} {state} ---")?;
                }
            }
        }
        self.out.flush()
    }

    pub fn note(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalSurface;
    use crate::platform::ui::render::RegionCommand;

    #[test]
    fn unchanged_regions_are_not_reprinted() {
        let mut surface = TerminalSurface::new(Vec::new());
        let commands = vec![
            RegionCommand::SetHtml {
                region: "affiliates-job-list",
                html: "<h3>x</h3>".to_string(),
            },
            RegionCommand::SetVisible {
                region: "job-search",
                visible: true,
            },
        ];
        surface.apply(commands.clone()).unwrap();
        surface.apply(commands).unwrap();
        surface
            .apply(vec![RegionCommand::SetVisible {
                region: "job-search",
                visible: false,
            }])
            .unwrap();

        let printed = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(
            printed,
            "--- #affiliates-job-list ---\n<h3>x</h3>\n--- #job-search shown ---\n--- #job-search hidden ---\n"
        );
    }
}
