//! Pick command - select assets from a group
//!
//! The group directory is enumerated on a background loader. Grid taps come
//! either from `--tap` arguments or from a line-based session on stdin; the
//! toolbar is reprinted whenever the selection changes.

use super::{effective_filter, effective_options};
use crate::{
    PickerError,
    assets::{Asset, AssetGroup, GroupLoader, LoadProgress, loader},
    cli::{GroupArgs, PICK_HELP, PickCommand},
    config::PickerConfig,
    controller::{AssetsController, ControllerError},
    output::{self, OutputWriter},
    selection::SelectionError,
};
use std::cell::Cell;
use std::io::BufRead;
use std::rc::Rc;

type Result<T> = std::result::Result<T, PickerError>;

/// How a pick session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user accepted this selection, in toolbar order
    Accepted(Vec<Asset>),
    /// The user quit without accepting
    Cancelled,
}

/// Options for the pick command beyond the group arguments
#[derive(Debug, Clone, Default)]
pub struct PickArgs {
    /// Selection limit override
    pub max: Option<usize>,
    /// Indices to tap non-interactively
    pub taps: Vec<usize>,
    /// Print the result as JSON
    pub json: bool,
}

/// Execute the pick command
///
/// # Errors
///
/// Returns an error if the group cannot be loaded, stdin cannot be read, or
/// the result cannot be serialized.
pub fn execute(
    group: &GroupArgs,
    args: &PickArgs,
    config: &PickerConfig,
    input: impl BufRead,
    out: &dyn OutputWriter,
) -> Result<PickOutcome> {
    let filter = effective_filter(group, config);
    let mut group_loader = GroupLoader::spawn(&group.dir, filter, config.page_size)?;
    let assets_group = AssetGroup::new(loader::group_name(&group.dir), filter);
    let mut controller = AssetsController::new(assets_group, effective_options(group, args.max, config));

    let outcome = if args.taps.is_empty() {
        run_session(&mut controller, &mut group_loader, input, out)?
    } else {
        controller.wait_for_loader(&mut group_loader)?;
        for &index in &args.taps {
            tap(&mut controller, index, None, out)?;
        }
        PickOutcome::Accepted(controller.finish())
    };

    if let PickOutcome::Accepted(assets) = &outcome {
        print_result(assets, args.json, out)?;
    }
    Ok(outcome)
}

/// Run the line-based session until `done`, `quit` or end of input
///
/// End of input counts as `done`.
///
/// # Errors
///
/// Returns an error if reading input fails or the loader fails.
pub fn run_session(
    controller: &mut AssetsController<AssetGroup>,
    group_loader: &mut GroupLoader,
    input: impl BufRead,
    out: &dyn OutputWriter,
) -> Result<PickOutcome> {
    let changed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&changed);
    let subscription = controller.subscribe(move |_| flag.set(true));

    out.info("Commands: tap <index>, delete <id>, rows, list, clear, help, done, quit");

    let mut outcome = None;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if controller.poll_loader(group_loader)? == LoadProgress::Loading {
            out.info(&format!(
                "Loading... {}/{} assets",
                controller.provider().loaded_count(),
                controller.item_count()
            ));
        }

        match PickCommand::parse(&line) {
            Ok(PickCommand::Tap(index)) => tap(controller, index, Some(&mut *group_loader), out)?,
            Ok(PickCommand::Delete(id)) => {
                if !controller.on_toolbar_item_deleted(&id) {
                    out.warning(&format!("'{id}' is not selected"));
                }
            }
            Ok(PickCommand::Rows) => print_rows(controller, out),
            Ok(PickCommand::List) => print_toolbar(controller, out),
            Ok(PickCommand::Clear) => {
                controller.clear_selection();
            }
            Ok(PickCommand::Help) => {
                for (usage, description) in PICK_HELP {
                    out.write(&format!("  {usage:<14} {description}"));
                }
            }
            Ok(PickCommand::Done) => {
                outcome = Some(true);
                break;
            }
            Ok(PickCommand::Quit) => {
                outcome = Some(false);
                break;
            }
            Err(message) => out.error(&message),
        }

        if changed.replace(false) {
            print_toolbar(controller, out);
        }
    }

    controller.unsubscribe(subscription);

    if outcome == Some(false) {
        return Ok(PickOutcome::Cancelled);
    }
    controller.wait_for_loader(group_loader)?;
    Ok(PickOutcome::Accepted(controller.finish()))
}

/// Tap one grid index, reporting recoverable failures as warnings
///
/// A tap on an index the loader has not delivered yet waits for the loader
/// to finish and is then retried once.
fn tap(
    controller: &mut AssetsController<AssetGroup>,
    index: usize,
    group_loader: Option<&mut GroupLoader>,
    out: &dyn OutputWriter,
) -> Result<()> {
    let result = match (controller.on_item_tapped(index), group_loader) {
        (
            Err(ControllerError::AssetNotReady(_) | ControllerError::IndexOutOfRange { .. }),
            Some(group_loader),
        ) if !group_loader.is_finished() => {
            out.info("Waiting for the group to finish loading...");
            controller.wait_for_loader(group_loader)?;
            controller.on_item_tapped(index)
        }
        (result, _) => result,
    };

    match result {
        Ok(_) => {}
        Err(ControllerError::Selection(SelectionError::SelectionLimitExceeded { capacity })) => {
            out.warning(&format!("You can select at most {capacity} assets"));
        }
        Err(e) => out.error(&e.to_string()),
    }
    Ok(())
}

fn print_rows(controller: &AssetsController<AssetGroup>, out: &dyn OutputWriter) {
    for row in 0..controller.row_count() {
        out.write(&output::format_row(&controller.items_in_row(row)));
    }
}

fn print_toolbar(controller: &AssetsController<AssetGroup>, out: &dyn OutputWriter) {
    let capacity = controller.store().capacity();
    for line in output::format_toolbar(&controller.selected_assets(), capacity) {
        out.info(&line);
    }
}

fn print_result(assets: &[Asset], json: bool, out: &dyn OutputWriter) -> Result<()> {
    if json {
        out.write(&serde_json::to_string_pretty(assets)?);
    } else {
        for asset in assets {
            out.write(&asset.thumbnail.display().to_string());
        }
    }
    Ok(())
}
