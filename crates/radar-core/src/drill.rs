// File: crates/radar-core/src/drill.rs
// Summary: Drill-down views: the series to show after descending into one or more axes.
// Notes:
// - A breadcrumb trail is the list of axis labels descended so far; the root
//   view is the empty trail. Keeping that trail is the caller's job.

use crate::series::Series;

/// Series for the view below `axis`.
///
/// Each series whose point on `axis` has children contributes a series with
/// the same name, color and opacity whose data are those children. Series
/// without such a point are left out.
pub fn drill_down(series: &[Series], axis: &str) -> Vec<Series> {
    series
        .iter()
        .filter_map(|s| {
            let parent = s.data.iter().find(|p| p.axis == axis && p.is_parent())?;
            Some(Series {
                name: s.name.clone(),
                data: parent.children.clone(),
                color: s.color.clone(),
                opacity: s.opacity,
            })
        })
        .collect()
}

/// Follow a breadcrumb trail from the root view.
pub fn drill_path<S: AsRef<str>>(series: &[Series], trail: &[S]) -> Vec<Series> {
    let mut view = series.to_vec();
    for axis in trail {
        view = drill_down(&view, axis.as_ref());
        if view.is_empty() {
            log::debug!("drill trail stopped at '{}'", axis.as_ref());
            break;
        }
    }
    view
}
