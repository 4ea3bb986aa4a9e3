use std::collections::HashMap;

use lib::prelude::*;

/// Location IDs from the two columns of the input, paired by line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

fn parse(mut input: IStr) -> Result<Lists> {
    let mut lists = Lists::default();

    for line in input.lines::<Option<Ends<i64>>>() {
        let Some(Ends(left, right)) = line? else {
            continue;
        };

        lists.left.push(left);
        lists.right.push(right);
    }

    debug!("parsed {} pairs", lists.left.len());
    Ok(lists)
}

/// Sum of distances between the lists when both are paired up smallest to
/// largest.
fn total_distance(lists: &Lists) -> Result<u64> {
    let mut left = lists.left.clone();
    let mut right = lists.right.clone();
    left.sort_unstable();
    right.sort_unstable();

    let mut total = 0u64;

    for (l, r) in left.iter().zip(&right) {
        total = total
            .checked_add(l.abs_diff(*r))
            .with_context(|| anyhow!("total distance overflows at {l} and {r}"))?;
    }

    Ok(total)
}

/// Each left value weighted by the number of times it occurs in the right list.
fn similarity(lists: &Lists) -> Result<i64> {
    let mut counts = HashMap::<i64, i64>::new();

    for &r in &lists.right {
        *counts.entry(r).or_default() += 1;
    }

    let mut score = 0i64;

    for &l in &lists.left {
        let count = counts.get(&l).copied().unwrap_or_default();

        score = l
            .checked_mul(count)
            .and_then(|n| score.checked_add(n))
            .with_context(|| anyhow!("similarity overflows at {l} seen {count} times"))?;
    }

    Ok(score)
}

fn solve(input: IStr) -> Result<(u64, i64)> {
    let lists = parse(input)?;
    Ok((total_distance(&lists)?, similarity(&lists)?))
}

lib::entry!(solve, input = "d01.txt", expect = (11, 31));
