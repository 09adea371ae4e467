//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. The script runner is
//! the reference driver for the core: it builds actions from script
//! operations, applies them, and records them into both trackers.

use std::fs;
use std::path::Path;

use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::action::{PaintAction, PaintStep};
use crate::error::{Result, TesseraError};
use crate::grid::Grid;
use crate::history::{ReplayTracker, UndoTracker};
use crate::layers::{self, Color};
use crate::store::DrawStyle;

/// A JSON edit script: grid configuration plus an operation sequence.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Compositing policy for every cell.
    pub style: DrawStyle,
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Background color composited against; defaults to white.
    #[serde(default = "default_start")]
    pub start: Color,
    /// Whether to replay the recorded session onto a fresh grid afterwards.
    #[serde(default)]
    pub replay: bool,
    /// Operations, applied in order.
    pub ops: Vec<ScriptOp>,
}

fn default_start() -> Color {
    (255, 255, 255)
}

/// One scripted edit operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    /// Paint a single cell with the named layer.
    Draw { x: u32, y: u32, layer: String },
    /// Paint a brush stroke centred on the cell, sized by the grid's
    /// current brush size.
    Stroke { x: u32, y: u32, layer: String },
    /// Trigger the grid-wide special sweep.
    Special,
    /// Undo the most recent action.
    Undo,
    /// Redo the most recently undone action.
    Redo,
    /// Grow the brush by one.
    GrowBrush,
    /// Shrink the brush by one.
    ShrinkBrush,
}

/// Outcome of a script run.
#[derive(Debug, Serialize)]
pub struct ScriptOutcome {
    /// The live grid, composited cell by cell.
    pub rendered: Vec<Vec<Color>>,
    /// The replayed grid, when the script asked for a replay.
    pub replayed: Option<Vec<Vec<Color>>>,
    /// Entries the replay tracker captured during the session.
    pub actions_recorded: usize,
}

/// Load and execute a script file.
pub fn run_script(path: &Path) -> Result<ScriptOutcome> {
    let text = fs::read_to_string(path)?;
    let script: Script = serde_json::from_str(&text)?;
    execute(&script)
}

/// Execute a parsed script against a fresh grid and trackers.
pub fn execute(script: &Script) -> Result<ScriptOutcome> {
    let mut grid = Grid::new(script.style, script.width, script.height)?;
    let mut undo = UndoTracker::new();
    let mut replay = ReplayTracker::new();
    let timestamp = Utc::now().timestamp() as u64;

    for op in &script.ops {
        match op {
            ScriptOp::Draw { x, y, layer } => {
                let layer = resolve_layer(layer)?;
                let action = PaintAction::new(vec![PaintStep::new(*x, *y, layer)], false);
                apply_and_record(&mut grid, &mut undo, &mut replay, action)?;
            }
            ScriptOp::Stroke { x, y, layer } => {
                let layer = resolve_layer(layer)?;
                let action = PaintAction::brush_stroke(
                    layer,
                    *x,
                    *y,
                    grid.brush_size(),
                    grid.width(),
                    grid.height(),
                );
                apply_and_record(&mut grid, &mut undo, &mut replay, action)?;
            }
            ScriptOp::Special => {
                apply_and_record(&mut grid, &mut undo, &mut replay, PaintAction::special())?;
            }
            ScriptOp::Undo => match undo.undo(&mut grid)? {
                Some(action) => record_replay(&mut replay, action, true),
                None => info!("nothing to undo"),
            },
            ScriptOp::Redo => match undo.redo(&mut grid)? {
                Some(action) => record_replay(&mut replay, action, false),
                None => info!("nothing to redo"),
            },
            ScriptOp::GrowBrush => {
                if !grid.increase_brush_size() {
                    info!("brush size already at maximum");
                }
            }
            ScriptOp::ShrinkBrush => {
                if !grid.decrease_brush_size() {
                    info!("brush size already at minimum");
                }
            }
        }
    }

    let actions_recorded = replay.remaining();
    let rendered = grid.render(script.start, timestamp);

    let replayed = if script.replay {
        replay.start_replay();
        let mut fresh = Grid::new(script.style, script.width, script.height)?;
        while !replay.step(&mut fresh)? {}
        Some(fresh.render(script.start, timestamp))
    } else {
        None
    };

    Ok(ScriptOutcome {
        rendered,
        replayed,
        actions_recorded,
    })
}

fn resolve_layer(name: &str) -> Result<crate::layers::Layer> {
    layers::by_name(name).ok_or_else(|| TesseraError::UnknownLayer {
        name: name.to_string(),
    })
}

fn apply_and_record(
    grid: &mut Grid,
    undo: &mut UndoTracker,
    replay: &mut ReplayTracker,
    action: PaintAction,
) -> Result<()> {
    action.redo_apply(grid)?;
    if !undo.record(action.clone()) {
        warn!("undo history full; action {} not recorded", action.id);
    }
    record_replay(replay, action, false);
    Ok(())
}

fn record_replay(replay: &mut ReplayTracker, action: PaintAction, is_undo: bool) {
    if !replay.record(action, is_undo) {
        warn!("replay queue full; entry dropped");
    }
}

/// Run a script file and print the outcome.
pub fn run(script: &Path) -> Result<()> {
    info!("Running script: {}", script.display());

    let outcome = run_script(script)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if let Some(replayed) = &outcome.replayed {
        if *replayed == outcome.rendered {
            println!("Replay matches the live grid.");
        } else {
            println!("Replay diverged from the live grid!");
        }
    }

    Ok(())
}

/// List the registered layers.
pub fn list_layers() -> Result<()> {
    println!("Registered layers:");
    for layer in &layers::LAYERS {
        println!("  {:>2}: {}", layer.index, layer.name);
    }
    Ok(())
}

/// Run a built-in demonstration: stroke, special, undo, then replay.
pub fn demo(style: &str) -> Result<()> {
    let style: DrawStyle = style.parse()?;
    info!("Starting demo with draw style: {}", style);

    let script = Script {
        style,
        width: 5,
        height: 5,
        start: default_start(),
        replay: true,
        ops: vec![
            ScriptOp::Stroke {
                x: 2,
                y: 2,
                layer: "darken".to_string(),
            },
            ScriptOp::Draw {
                x: 0,
                y: 0,
                layer: "invert".to_string(),
            },
            ScriptOp::Special,
            ScriptOp::Undo,
            ScriptOp::Draw {
                x: 4,
                y: 4,
                layer: "black".to_string(),
            },
        ],
    };

    let outcome = execute(&script)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    match &outcome.replayed {
        Some(replayed) if *replayed == outcome.rendered => {
            println!("Replay reproduced the live grid exactly.");
        }
        Some(_) => println!("Replay diverged from the live grid!"),
        None => {}
    }

    Ok(())
}
