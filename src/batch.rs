//! Enumerates the icon files to produce and writes them to an output directory

use crate::config::Config;
use crate::render::{encode_png, RenderRequest};
use crate::status::Status;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Scales every icon gets
const BASE_SCALES: [u32; 2] = [1, 2];

/// Extra scale for small status bar icons
const TRIPLE_SCALE: u32 = 3;

/// Which icon families a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub status_bar: bool,
    pub app_icons: bool,
}

impl Selection {
    /// Status bar icons unless `app_icon_only`; app icons unless `status_bar_only`.
    /// Passing both flags selects nothing.
    pub fn from_flags(status_bar_only: bool, app_icon_only: bool) -> Self {
        Selection {
            status_bar: !app_icon_only,
            app_icons: !status_bar_only,
        }
    }

    pub fn all() -> Self {
        Selection::from_flags(false, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFamily {
    StatusBar,
    AppIcon,
}

/// One file to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub family: IconFamily,
    pub name: String,
    pub request: RenderRequest,
}

impl IconJob {
    pub fn file_name(&self) -> String {
        file_name(&self.name, self.request.base_size, self.request.scale)
    }
}

/// `{name}-{size}.png` at 1x, `{name}-{size}@{scale}x.png` otherwise
pub fn file_name(name: &str, size: u32, scale: u32) -> String {
    if scale == 1 {
        format!("{}-{}.png", name, size)
    } else {
        format!("{}-{}@{}x.png", name, size, scale)
    }
}

fn status_bar_scales(size: u32, triple_scale_max_size: u32) -> Vec<u32> {
    let mut scales = BASE_SCALES.to_vec();
    if size <= triple_scale_max_size {
        scales.push(TRIPLE_SCALE);
    }
    scales
}

fn jobs_for<'a>(
    family: IconFamily,
    name: &str,
    status: Status,
    size: u32,
    scales: &'a [u32],
) -> impl Iterator<Item = IconJob> + 'a {
    let name = name.to_string();
    scales.iter().map(move |&scale| IconJob {
        family,
        name: name.clone(),
        request: RenderRequest::new(size, status, scale),
    })
}

/// Every file a run with `selection` produces, status bar icons first
pub fn plan(config: &Config, selection: Selection) -> Vec<IconJob> {
    let mut jobs = Vec::new();

    if selection.status_bar {
        let status_bar = &config.status_bar;
        for icon in &status_bar.icons {
            for &size in &status_bar.sizes {
                let scales = status_bar_scales(size, status_bar.triple_scale_max_size);
                jobs.extend(jobs_for(
                    IconFamily::StatusBar,
                    &icon.name,
                    icon.status,
                    size,
                    &scales,
                ));
            }
        }
    }

    if selection.app_icons {
        let app_icon = &config.app_icon;
        for &size in &app_icon.sizes {
            jobs.extend(jobs_for(
                IconFamily::AppIcon,
                &app_icon.name,
                app_icon.status,
                size,
                &BASE_SCALES,
            ));
        }
    }

    jobs
}

/// Files written by a run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub status_bar_count: usize,
    pub app_icon_count: usize,
}

impl BatchSummary {
    fn record(&mut self, job: &IconJob, path: PathBuf) {
        match job.family {
            IconFamily::StatusBar => self.status_bar_count += 1,
            IconFamily::AppIcon => self.app_icon_count += 1,
        }
        self.written.push(path);
    }
}

fn write_job(output_dir: &Path, job: &IconJob) -> Result<PathBuf> {
    let path = output_dir.join(job.file_name());
    let size = job.request.checked_actual_size().with_context(|| {
        format!(
            "Icon size {}x{} is too large for {}",
            job.request.base_size,
            job.request.scale,
            path.display()
        )
    })?;
    let bytes = encode_png(&job.request.render())?;
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        status = %job.request.status,
        size,
        "Wrote icon"
    );

    Ok(path)
}

/// Render and write every planned icon into `output_dir`, creating it first.
///
/// Existing files with the same names are overwritten.
pub fn generate(output_dir: &Path, config: &Config, selection: Selection) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let jobs = plan(config, selection);
    let mut summary = BatchSummary::default();

    if selection.status_bar {
        println!("Generating status bar icons...");
        for icon in &config.status_bar.icons {
            println!("  Generating {} icons...", icon.name);
            for job in jobs
                .iter()
                .filter(|job| job.family == IconFamily::StatusBar && job.name == icon.name)
            {
                summary.record(job, write_job(output_dir, job)?);
            }
        }
    }

    if selection.app_icons {
        println!("Generating app icons...");
        for job in jobs.iter().filter(|job| job.family == IconFamily::AppIcon) {
            summary.record(job, write_job(output_dir, job)?);
        }
    }

    tracing::info!(
        files = summary.written.len(),
        status_bar = summary.status_bar_count,
        app_icons = summary.app_icon_count,
        "Icon generation finished"
    );
    println!("Icon generation complete! Output directory: {}", output_dir.display());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(file_name("wifi-error", 16, 1), "wifi-error-16.png");
        assert_eq!(file_name("wifi-error", 16, 2), "wifi-error-16@2x.png");
        assert_eq!(file_name("app-icon", 512, 2), "app-icon-512@2x.png");
    }

    #[test]
    fn test_selection_from_flags() {
        let cases = [
            ((false, false), (true, true)),
            ((true, false), (true, false)),
            ((false, true), (false, true)),
            ((true, true), (false, false)),
        ];

        for ((status_bar_only, app_icon_only), (status_bar, app_icons)) in cases {
            assert_eq!(
                Selection::from_flags(status_bar_only, app_icon_only),
                Selection {
                    status_bar,
                    app_icons
                }
            );
        }
    }

    #[test]
    fn test_triple_scale_threshold() {
        assert_eq!(status_bar_scales(22, 32), [1, 2, 3]);
        assert_eq!(status_bar_scales(32, 32), [1, 2, 3]);
        assert_eq!(status_bar_scales(33, 32), [1, 2]);
    }

    #[test]
    fn test_default_plan_counts() {
        let jobs = plan(&Config::default(), Selection::all());
        let status_bar = jobs.iter().filter(|j| j.family == IconFamily::StatusBar).count();
        let app = jobs.iter().filter(|j| j.family == IconFamily::AppIcon).count();
        assert_eq!(status_bar, 48);
        assert_eq!(app, 10);
    }

    #[test]
    fn test_app_icons_never_get_3x() {
        let jobs = plan(&Config::default(), Selection::from_flags(false, true));
        assert!(jobs.iter().all(|j| j.request.scale <= 2));
        assert!(jobs.iter().all(|j| j.request.status == Status::Connected));
    }

    #[test]
    fn test_both_flags_plan_nothing() {
        assert!(plan(&Config::default(), Selection::from_flags(true, true)).is_empty());
    }

    #[test]
    fn test_oversized_job_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let job = IconJob {
            family: IconFamily::AppIcon,
            name: "huge".to_string(),
            request: RenderRequest::new(u32::MAX, Status::Connected, 2),
        };

        assert!(write_job(dir.path(), &job).is_err());
        assert!(!dir.path().join(job.file_name()).exists());
    }

    #[test]
    fn test_status_bar_names_map_to_statuses() {
        let jobs = plan(&Config::default(), Selection::from_flags(true, false));
        let error = jobs.iter().find(|j| j.name == "wifi-error").unwrap();
        assert_eq!(error.request.status, Status::Error);
        let connecting = jobs.iter().find(|j| j.name == "wifi-connecting").unwrap();
        assert_eq!(connecting.request.status, Status::Connecting);
    }
}
