use std::iter::from_fn;

use lib::prelude::*;

/// The levels of a single report.
#[derive(Debug)]
struct Report {
    levels: Vec<i64>,
}

lib::from_input! {
    |levels: Vec<i64>| -> Report {
        ensure!(levels.len() > 1, "report needs at least two levels, but got {}", levels.len());
        Ok(Report { levels })
    }
}

fn parse(mut input: IStr) -> Result<Vec<Report>> {
    let mut reports = Vec::new();

    for report in input.lines::<Option<Report>>() {
        reports.extend(report?);
    }

    debug!("parsed {} reports", reports.len());
    Ok(reports)
}

/// Test if levels are strictly increasing or decreasing, with each step
/// between 1 and 3.
///
/// The direction is picked by the first step. Fewer than two levels have no
/// steps and are trivially safe.
fn is_safe(levels: impl IntoIterator<Item = i64>) -> bool {
    let mut sign = None;

    pairs(levels).all(|(a, b)| {
        let Some(d) = b.checked_sub(a) else {
            return false;
        };

        let expected = *sign.get_or_insert(d.signum());
        d.signum() == expected && matches!(d.unsigned_abs(), 1..=3)
    })
}

/// Test if levels are safe, or would be with one of them removed.
fn is_dampened_safe(levels: &[i64]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|n| is_safe(skip(levels.iter().copied(), n)))
}

fn count_safe(reports: &[Report]) -> usize {
    reports.iter().filter(|r| is_safe(r.levels.iter().copied())).count()
}

fn count_dampened(reports: &[Report]) -> usize {
    reports.iter().filter(|r| is_dampened_safe(&r.levels)).count()
}

fn solve(input: IStr) -> Result<(usize, usize)> {
    let reports = parse(input)?;
    Ok((count_safe(&reports), count_dampened(&reports)))
}

lib::entry!(solve, input = "d02.txt", expect = (2, 4));

#[inline]
fn pairs(it: impl IntoIterator<Item = i64>) -> impl Iterator<Item = (i64, i64)> {
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}

#[inline]
fn skip(it: impl IntoIterator<Item = i64>, redact: usize) -> impl Iterator<Item = i64> {
    it.into_iter()
        .enumerate()
        .filter(move |&(i, _)| redact != i)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = indoc::indoc! {"
        7 6 4 2 1
        1 2 7 8 9
        9 7 6 2 1
        1 3 2 4 5
        8 6 4 4 1
        1 3 6 7 9
    "};

    fn sample() -> Vec<Report> {
        parse(IStr::from_static(SAMPLE)).unwrap()
    }

    #[test]
    fn test_parse() {
        let reports = sample();
        let levels = reports.iter().map(|r| &r.levels[..]).collect::<Vec<_>>();

        assert_eq!(
            levels,
            [
                &[7, 6, 4, 2, 1][..],
                &[1, 2, 7, 8, 9],
                &[9, 7, 6, 2, 1],
                &[1, 3, 2, 4, 5],
                &[8, 6, 4, 4, 1],
                &[1, 3, 6, 7, 9],
            ]
        );
    }

    #[test]
    fn test_parse_too_short() {
        let error = parse(IStr::from_static("1 2 3\n4\n")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "report needs at least two levels, but got 1"
        );
    }

    #[test]
    fn test_parse_not_integer() {
        assert!(parse(IStr::from_static("1 2 x\n")).is_err());
    }

    #[test]
    fn test_count_safe() {
        let reports = sample();
        assert_eq!(count_safe(&reports), 2);

        let safe = reports
            .iter()
            .filter(|r| is_safe(r.levels.iter().copied()))
            .map(|r| &r.levels[..])
            .collect::<Vec<_>>();

        assert_eq!(safe, [&[7, 6, 4, 2, 1][..], &[1, 3, 6, 7, 9]]);
    }

    #[test]
    fn test_count_dampened() {
        assert_eq!(count_dampened(&sample()), 4);
    }

    #[test]
    fn test_is_safe_is_pure() {
        for report in sample() {
            let first = is_safe(report.levels.iter().copied());

            for _ in 0..3 {
                assert_eq!(is_safe(report.levels.iter().copied()), first);
            }
        }
    }

    #[test]
    fn test_repeated_level() {
        assert!(!is_safe([1, 1, 2, 3]));
        assert!(is_dampened_safe(&[1, 1, 2, 3]));
        assert!(!is_safe([5, 5, 5]));
        assert!(!is_dampened_safe(&[5, 5, 5]));
    }

    #[test]
    fn test_direction_from_first_step() {
        assert!(is_safe([1, 2, 4, 7]));
        assert!(is_safe([7, 4, 2, 1]));
        assert!(!is_safe([1, 2, 1, 2]));
        assert!(!is_safe([1, 5, 6]));
        assert!(is_dampened_safe(&[5, 1, 2, 3]));
        assert!(is_dampened_safe(&[1, 2, 3, 9]));
    }

    #[test]
    fn test_short_levels() {
        assert!(is_safe([]));
        assert!(is_safe([4]));
        assert!(!is_safe([1, 9]));
        assert!(is_dampened_safe(&[1, 9]));
    }

    #[test]
    fn test_overflow() {
        assert!(!is_safe([i64::MIN, i64::MAX]));
        assert!(!is_safe([i64::MAX, i64::MIN]));
        assert!(!is_safe([0, i64::MIN]));
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve(IStr::from_static(SAMPLE)).unwrap(), (2, 4));
    }

    #[test]
    fn test_main_with_bundled_input() {
        main().unwrap();
    }
}
