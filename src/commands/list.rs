//! List command - print a group's assets as grid rows

use super::{effective_filter, effective_options};
use crate::{
    PickerError,
    assets::{self, AssetProvider},
    cli::GroupArgs,
    config::PickerConfig,
    controller::AssetsController,
    output::{self, OutputWriter},
};

type Result<T> = std::result::Result<T, PickerError>;

/// Execute the list command
///
/// # Errors
///
/// Returns `PickerError::Asset` if the directory cannot be enumerated.
pub fn execute(group: &GroupArgs, config: &PickerConfig, out: &dyn OutputWriter) -> Result<()> {
    let assets_group = assets::load_group(&group.dir, effective_filter(group, config))?;
    let name = assets_group.name().to_string();
    let filter = assets_group.filter();
    let controller = AssetsController::new(assets_group, effective_options(group, None, config));

    if controller.item_count() == 0 {
        out.info(&format!("No matching assets in '{name}' (filter: {filter})."));
        return Ok(());
    }

    out.info(&format!(
        "{} ({} assets, {} rows, filter: {}):",
        name,
        controller.provider().group_asset_count(),
        controller.row_count(),
        filter
    ));
    for row in 0..controller.row_count() {
        out.write(&output::format_row(&controller.items_in_row(row)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MediaFilter;
    use crate::cli::FilterArg;
    use crate::output::{BufferedWriter, MessageLevel};
    use crate::testing::TestMediaDir;

    #[test]
    fn test_list_prints_rows() {
        let dir = TestMediaDir::new(&["a.jpg", "b.jpg", "c.mp4"]);
        let group = GroupArgs {
            dir: dir.path().to_path_buf(),
            filter: None,
            columns: Some(2),
        };
        let out = BufferedWriter::new();

        execute(&group, &PickerConfig::default(), &out).unwrap();

        let rows: Vec<String> = out
            .messages()
            .into_iter()
            .filter(|(level, _)| *level == MessageLevel::Normal)
            .map(|(_, msg)| msg)
            .collect();
        assert_eq!(rows, vec!["[ ] 0:a.jpg  [ ] 1:b.jpg", "[ ] 2:c.mp4"]);
    }

    #[test]
    fn test_list_empty_group() {
        let dir = TestMediaDir::new(&["readme.txt"]);
        let group = GroupArgs {
            dir: dir.path().to_path_buf(),
            filter: None,
            columns: None,
        };
        let out = BufferedWriter::new();

        execute(&group, &PickerConfig::default(), &out).unwrap();

        let messages = out.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.starts_with("No matching assets"));
        assert!(messages[0].1.ends_with("(filter: all)."));
    }

    #[test]
    fn test_list_reports_applied_filter() {
        let dir = TestMediaDir::new(&["a.jpg", "b.mp4", "c.jpg"]);
        let group = GroupArgs {
            dir: dir.path().to_path_buf(),
            filter: Some(FilterArg::Videos),
            columns: None,
        };
        let mut config = PickerConfig::default();
        config.filter = MediaFilter::Photos;
        let out = BufferedWriter::new();

        execute(&group, &config, &out).unwrap();

        let messages = out.messages();
        assert_eq!(messages[0].0, MessageLevel::Info);
        assert!(messages[0].1.ends_with("(1 assets, 1 rows, filter: videos):"));
        assert_eq!(messages[1].1, "[ ] 0:b.mp4");
    }

    #[test]
    fn test_list_missing_directory() {
        let group = GroupArgs {
            dir: "/no/such/dir".into(),
            filter: None,
            columns: None,
        };
        let out = BufferedWriter::new();
        assert!(execute(&group, &PickerConfig::default(), &out).is_err());
    }
}
