use lib::prelude::*;

#[entry(input = "d01.txt", expect = (11, 31))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let (mut left, mut right) = columns(&mut input)?;

    left.sort_unstable();
    right.sort_unstable();

    Ok((distance(&left, &right), similarity(&left, &right)))
}

fn columns(input: &mut IStr) -> Result<(Vec<u32>, Vec<u32>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for value in input.iter::<(u32, u32)>() {
        let (a, b) = value?;
        left.push(a);
        right.push(b);
    }

    Ok((left, right))
}

/// Pairwise distance between two sorted columns.
fn distance(left: &[u32], right: &[u32]) -> u32 {
    left.iter().zip(right).map(|(a, b)| a.abs_diff(*b)).sum()
}

/// Similarity score by merging two sorted columns, so that each run of equal
/// values is only counted once on either side.
fn similarity(left: &[u32], right: &[u32]) -> u32 {
    let mut score = 0;
    let (mut l, mut r) = (0, 0);

    while let (Some(&a), Some(&b)) = (left.get(l), right.get(r)) {
        if a < b {
            l += 1;
            continue;
        }

        if a > b {
            r += 1;
            continue;
        }

        let lefts = left[l..].iter().take_while(|&&v| v == a).count();
        let rights = right[r..].iter().take_while(|&&v| v == a).count();
        score += a * (lefts * rights) as u32;
        l += lefts;
        r += rights;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let mut input = IStr::from_static(include_bytes!("../../inputs/d01.txt"));
        let (mut left, mut right) = columns(&mut input).unwrap();
        left.sort_unstable();
        right.sort_unstable();

        assert_eq!(left, [1, 2, 3, 3, 3, 4]);
        assert_eq!(distance(&left, &right), 11);
        assert_eq!(similarity(&left, &right), 31);
    }

    #[test]
    fn test_similarity_without_overlap() {
        assert_eq!(similarity(&[1, 2], &[3, 4]), 0);
        assert_eq!(similarity(&[], &[3, 4]), 0);
        assert_eq!(similarity(&[5, 5], &[5]), 10);
    }
}
