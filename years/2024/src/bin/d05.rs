use lib::prelude::*;

/// Pages are used as bit indexes, so they have to fit in a `u128`.
const PAGES: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Page(u8);

impl Page {
    fn bit(self) -> u32 {
        u32::from(self.0)
    }
}

lib::from_input! {
    |n: u32| -> Page {
        ensure!((n as usize) < PAGES, "page {n} is out of range");
        Ok(Page(n as u8))
    }
}

#[entry(input = "d05.txt", expect = (143, 123))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    let rules = Rules::parse(&mut input)?;

    let mut ordered = 0;
    let mut reordered = 0;

    while let Some(Split(update)) = input.try_line::<Split<',', Vec<Page>>>()? {
        if update.is_empty() {
            continue;
        }

        if rules.is_ordered(&update) {
            ordered += middle(&update)?;
        } else {
            reordered += middle(&rules.sort(&update))?;
        }
    }

    Ok((ordered, reordered))
}

fn middle(update: &[Page]) -> Result<u32> {
    let page = update.get(update.len() / 2).context("empty update")?;
    Ok(page.bit())
}

struct Rules {
    /// For every page, the set of pages which must come before it.
    before: [u128; PAGES],
}

impl Rules {
    /// Parse rules up until the first empty line.
    fn parse(input: &mut IStr) -> Result<Self> {
        let mut before = [0u128; PAGES];

        while let Some(Split((a, b))) = input.line::<Option<Split<'|', (Page, Page)>>>()? {
            before[usize::from(b.0)].set_bit(a.bit());
        }

        Ok(Self { before })
    }

    /// Test if `a` is required to come before `b`.
    fn requires(&self, a: Page, b: Page) -> bool {
        self.before[usize::from(b.0)].test_bit(a.bit())
    }

    fn is_ordered(&self, update: &[Page]) -> bool {
        update
            .iter()
            .enumerate()
            .all(|(n, &a)| update[n + 1..].iter().all(|&b| !self.requires(b, a)))
    }

    /// Sort an update by depth-first insertion of the pages each page depends
    /// on, limited to the pages present in the update.
    fn sort(&self, update: &[Page]) -> Vec<Page> {
        let mut present = 0u128;

        for page in update {
            present.set_bit(page.bit());
        }

        let mut visited = 0u128;
        let mut sorted = Vec::with_capacity(update.len());

        for &page in update {
            self.visit(page, present, &mut visited, &mut sorted);
        }

        sorted
    }

    fn visit(&self, page: Page, present: u128, visited: &mut u128, sorted: &mut Vec<Page>) {
        if visited.test_bit(page.bit()) {
            return;
        }

        visited.set_bit(page.bit());

        for bit in (self.before[usize::from(page.0)] & present).iter_ones() {
            self.visit(Page(bit as u8), present, visited, sorted);
        }

        sorted.push(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(values: &[u8]) -> Vec<Page> {
        values.iter().copied().map(Page).collect()
    }

    fn sample() -> (Rules, IStr) {
        let mut input = IStr::from_static(include_bytes!("../../inputs/d05.txt"));
        let rules = Rules::parse(&mut input).unwrap();
        (rules, input)
    }

    #[test]
    fn test_ordering() {
        let (rules, _) = sample();

        assert!(rules.requires(Page(47), Page(53)));
        assert!(!rules.requires(Page(53), Page(47)));

        assert!(rules.is_ordered(&pages(&[75, 47, 61, 53, 29])));
        assert!(!rules.is_ordered(&pages(&[75, 97, 47, 61, 53])));
        assert!(!rules.is_ordered(&pages(&[97, 13, 75, 29, 47])));
    }

    #[test]
    fn test_sort() {
        let (rules, _) = sample();

        assert_eq!(rules.sort(&pages(&[75, 97, 47, 61, 53])), pages(&[97, 75, 47, 61, 53]));
        assert_eq!(rules.sort(&pages(&[61, 13, 29])), pages(&[61, 29, 13]));
        assert_eq!(rules.sort(&pages(&[97, 13, 75, 29, 47])), pages(&[97, 75, 47, 29, 13]));
    }

    #[test]
    fn test_sample() {
        let (rules, mut input) = sample();
        let mut totals = (0, 0);

        while let Some(Split(update)) = input.try_line::<Split<',', Vec<Page>>>().unwrap() {
            if update.is_empty() {
                continue;
            }

            if rules.is_ordered(&update) {
                totals.0 += middle(&update).unwrap();
            } else {
                totals.1 += middle(&rules.sort(&update)).unwrap();
            }
        }

        assert_eq!(totals, (143, 123));
    }

    #[test]
    fn test_page_out_of_range() {
        let mut input = IStr::from_static(b"12|128\n");
        assert!(input.line::<Option<Split<'|', (Page, Page)>>>().is_err());
    }
}
