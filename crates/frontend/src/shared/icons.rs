use leptos::prelude::*;

/// Stroke paths of each known icon, drawn on a 24x24 grid.
fn icon_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "network" => &[
            "M9 2h6v6H9z",
            "M2 16h6v6H2z",
            "M16 16h6v6h-6z",
            "M5 16v-4h14v4",
            "M12 12V8",
        ],
        "code" => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
        "file-code" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M10 12l-2 2 2 2",
            "M14 16l2-2-2-2",
        ],
        "terminal" => &["M4 17l6-6-6-6", "M12 19h8"],
        "regex" => &[
            "M17 3v10",
            "M12.67 5.5l8.66 5",
            "M12.67 10.5l8.66-5",
            "M4 17h4v4H4z",
        ],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "file-text" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M16 13H8",
            "M16 17H8",
            "M10 9H8",
        ],
        "languages" => &[
            "M5 8l6 6",
            "M4 14l6-6 2-3",
            "M2 5h12",
            "M7 2h1",
            "M22 22l-5-10-5 10",
            "M14 18h6",
        ],
        "settings" => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.26 14H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.17-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 10 3.26V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.74 10H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        "palette" => &[
            "M12 22a10 10 0 1 1 10-10c0 2.76-2.24 4-5 4h-1.5a1.5 1.5 0 0 0-1 2.6A1.5 1.5 0 0 1 12 22z",
            "M7.5 10.5h.01",
            "M12 7.5h.01",
            "M16.5 10.5h.01",
        ],
        "menu" => &["M3 6h18", "M3 12h18", "M3 18h18"],
        "upload" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M17 8l-5-5-5 5",
            "M12 3v12",
        ],
        "folder-open" => &[
            "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
            "M2 7h20",
        ],
        "message-square" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "trash" => &[
            "M3 6h18",
            "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
            "M10 11v6",
            "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ],
        _ => return None,
    };
    Some(paths)
}

const FALLBACK: &[&str] = &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4l3 3"];

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name).unwrap_or(FALLBACK);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
