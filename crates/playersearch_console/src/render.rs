// Turns the search state into the text shown to the user.

use playersearch_interface::players::model::Player;

use crate::search_controller::SearchState;

pub const NO_PLAYERS_FOUND: &str = "No players found.";
pub const SEARCH_FAILED: &str = "Search failed, please try again.";
pub const SEARCHING: &str = "Searching...";

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub show_details: bool,
    pub show_fetch_errors: bool,
}

pub fn render_state(state: &SearchState, options: &RenderOptions) -> String {
    match state {
        SearchState::Populated(players) => players
            .iter()
            .map(|player| render_card(player, options))
            .collect::<Vec<String>>()
            .join("\n\n"),
        SearchState::Loading => SEARCHING.to_string(),
        SearchState::Failed if options.show_fetch_errors => SEARCH_FAILED.to_string(),
        SearchState::Idle | SearchState::Empty | SearchState::Failed => {
            NO_PLAYERS_FOUND.to_string()
        }
    }
}

pub fn render_card(player: &Player, options: &RenderOptions) -> String {
    let mut lines = vec![
        player.full_name(),
        format!("Team: {}", or_na(player.team_name())),
        format!("Position: {}", or_na(player.position.as_deref())),
        format!("Height: {}", or_na(player.height.as_deref())),
        match &player.weight {
            Some(weight) => format!("Weight: {}lbs.", weight),
            None => format!("Weight: {}", NOT_AVAILABLE),
        },
    ];

    if options.show_details {
        lines.push(match &player.jersey_number {
            Some(jersey) => format!("Jersey: #{}", jersey),
            None => format!("Jersey: {}", NOT_AVAILABLE),
        });
        lines.push(format!("College: {}", or_na(player.college.as_deref())));
        lines.push(format!("Draft: {}", draft_line(player)));
    }

    lines.join("\n")
}

fn draft_line(player: &Player) -> String {
    match (player.draft_year, player.draft_round, player.draft_number) {
        (Some(year), Some(round), Some(number)) => {
            format!("{} Round {} Pick {}", year, round, number)
        }
        (Some(year), _, _) => year.to_string(),
        // Undrafted players come back with every draft field null.
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
