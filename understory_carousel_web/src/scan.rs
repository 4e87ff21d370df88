// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::BindError;

/// Result of one scan over the document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    /// Number of carousels bound by this scan.
    pub bound: usize,
    /// Roots skipped because an earlier scan already bound them.
    pub skipped: usize,
    /// Roots that matched but could not be bound.
    pub errors: Vec<BindError>,
}

/// Binds every root that is not already bound.
///
/// Each root is independent: a root whose `bind` fails is recorded in
/// [`BindReport::errors`] and the scan moves on to the next one. Returns the
/// bound carousels in root order alongside the report.
pub fn scan<R, C>(
    roots: impl IntoIterator<Item = R>,
    mut is_bound: impl FnMut(&R) -> bool,
    mut bind: impl FnMut(R) -> Result<C, BindError>,
) -> (Vec<C>, BindReport) {
    let mut carousels = Vec::new();
    let mut report = BindReport::default();
    for root in roots {
        if is_bound(&root) {
            report.skipped += 1;
            continue;
        }
        match bind(root) {
            Ok(carousel) => {
                carousels.push(carousel);
                report.bound += 1;
            }
            Err(err) => {
                log::warn!("carousel: skipping root: {err}");
                report.errors.push(err);
            }
        }
    }
    log::debug!(
        "carousel scan bound {}, skipped {}, failed {}",
        report.bound,
        report.skipped,
        report.errors.len()
    );
    (carousels, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct Root {
        id: u32,
        bound: bool,
        has_track: bool,
    }

    fn root(id: u32, bound: bool, has_track: bool) -> Root {
        Root {
            id,
            bound,
            has_track,
        }
    }

    fn bind(root: Root) -> Result<u32, BindError> {
        if root.has_track {
            Ok(root.id)
        } else {
            Err(BindError::MissingTrack {
                selector: ".carousel-track".into(),
            })
        }
    }

    #[test]
    fn missing_track_is_reported_and_scan_continues() {
        let roots = [root(1, false, true), root(2, false, false), root(3, false, true)];

        let (bound, report) = scan(roots, |r| r.bound, bind);

        assert_eq!(bound, [1, 3]);
        assert_eq!(report.bound, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            report.errors,
            [BindError::MissingTrack {
                selector: ".carousel-track".into()
            }]
        );
    }

    #[test]
    fn already_bound_roots_are_skipped_without_binding() {
        let roots = [root(1, true, true), root(2, false, true), root(3, true, false)];
        let mut attempted = Vec::new();

        let (bound, report) = scan(
            roots,
            |r| r.bound,
            |r| {
                attempted.push(r.id);
                bind(r)
            },
        );

        assert_eq!(attempted, [2]);
        assert_eq!(bound, [2]);
        assert_eq!(report.skipped, 2);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn rescan_after_marking_binds_nothing_new() {
        let mut roots = vec![root(1, false, true), root(2, false, true)];

        let (first, _) = scan(roots.clone(), |r| r.bound, bind);
        for r in &mut roots {
            r.bound = first.contains(&r.id);
        }
        let (second, report) = scan(roots, |r| r.bound, bind);

        assert_eq!(first, [1, 2]);
        assert!(second.is_empty());
        assert_eq!(report.bound, 0);
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn empty_page_reports_nothing() {
        let (bound, report) = scan(Vec::<Root>::new(), |r| r.bound, bind);
        assert!(bound.is_empty());
        assert_eq!(report, BindReport::default());
    }
}
