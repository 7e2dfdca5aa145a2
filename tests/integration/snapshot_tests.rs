//! Snapshot tests using insta.
//!
//! These tests capture the exact text of the list output and the rendered
//! menu. Every row is prefixed with `|` so leading spaces survive the inline
//! snapshot formatting.

use assert_cmd::cargo::cargo_bin_cmd;
use distructions::catalog::{Catalog, CatalogStore};
use distructions::config::AppearanceConfig;
use distructions::tui::{render, Controller, Key, MenuState, Theme};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::integration::fixtures::create_project_with_catalog;

fn rows(text: &str) -> String {
    text.lines()
        .map(|line| format!("|{}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(controller: &Controller, width: u16, height: u16, appearance: &AppearanceConfig) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let theme = Theme::default();
    terminal
        .draw(|frame| {
            render(
                frame,
                &controller.view(),
                &theme,
                appearance,
                &mut MenuState::default(),
            )
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let text: Vec<String> = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect();
    rows(&text.join("\n"))
}

fn web_app() -> Catalog {
    let project = create_project_with_catalog("web_app.json");
    CatalogStore::new(project.path()).load().unwrap()
}

// ==================== List Output ====================

#[test]
fn test_snapshot_list_output() {
    let project = create_project_with_catalog("web_app.json");

    let output = cargo_bin_cmd!("distructions")
        .args(["--list", "--no-config"])
        .current_dir(project.path())
        .output()
        .unwrap();

    insta::assert_snapshot!(rows(&String::from_utf8_lossy(&output.stdout)), @r"
    |Commands for web-app:
    |
    |  npm: dev           npm run dev  Run npm script: vite
    |  npm: build         npm run build  Run npm script: vite build
    |  Docker: Start All  docker-compose up  Start all Docker containers
    |  Greet              echo hello from distructions
    |
    |4 commands found
    ");
}

#[test]
fn test_snapshot_dry_run_output() {
    let project = create_project_with_catalog("web_app.json");

    let output = cargo_bin_cmd!("distructions")
        .args(["--no-config", "-n", "npm: build", "-d"])
        .current_dir(project.path())
        .output()
        .unwrap();

    insta::assert_snapshot!(rows(&String::from_utf8_lossy(&output.stdout)), @"|Would run: npm run build");
}

// ==================== Rendered Menu ====================

#[test]
fn test_snapshot_menu_first_entry() {
    let controller = Controller::new(web_app());

    insta::assert_snapshot!(draw(&controller, 40, 14, &AppearanceConfig::default()), @r"
    | distructions web-app
    |
    |  → npm: dev
    |      Run npm script: vite
    |
    |    npm: build
    |      Run npm script: vite build
    |
    |    Docker: Start All
    |      Start all Docker containers
    |
    |    Greet
    |
    | ↑/↓ move  Enter run  Press q to quit.
    ");
}

#[test]
fn test_snapshot_menu_compact_after_moving() {
    let mut controller = Controller::new(web_app());
    controller.handle(Key::Last);

    let appearance = AppearanceConfig {
        compact: true,
        show_descriptions: false,
        ..Default::default()
    };

    insta::assert_snapshot!(draw(&controller, 40, 8, &appearance), @r"
    | distructions web-app
    |    npm: dev
    |    npm: build
    |    Docker: Start All
    |  → Greet
    |
    |
    | ↑/↓ move  Enter run  Press q to quit.
    ");
}

#[test]
fn test_snapshot_menu_empty() {
    let controller = Controller::new(Catalog::new("scratch"));

    insta::assert_snapshot!(draw(&controller, 80, 8, &AppearanceConfig::default()), @r"
    | distructions scratch
    |
    |
    |                            Nothing to run here yet.
    |     Add a package.json, compose file, go.mod or Cargo.toml and run again.
    |
    |
    | No commands detected
    ");
}

#[test]
fn test_snapshot_farewell() {
    let mut controller = Controller::new(web_app());
    controller.handle(Key::Quit);

    insta::assert_snapshot!(draw(&controller, 30, 3, &AppearanceConfig::default()), @r"
    | Bye!
    |
    |
    ");
}
