#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod access_tests;

#[cfg(test)]
mod report_filter_tests;

#[cfg(test)]
mod admin_review_tests;

#[cfg(test)]
mod leaderboard_tests;

#[cfg(test)]
mod heatmap_tests;

#[cfg(test)]
mod settings_tests;

#[cfg(test)]
mod chart_render_tests;
