use crate::content::FaqEntry;

/// One FAQ entry as rendered, with the link that toggles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItemView {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub is_open: bool,
    pub toggle_href: String,
}

/// FAQ list where at most one answer is expanded.
#[derive(Debug, Clone)]
pub struct Accordion<'a> {
    entries: &'a [FaqEntry],
    open: Option<usize>,
}

impl<'a> Accordion<'a> {
    /// All items start collapsed.
    pub fn new(entries: &'a [FaqEntry]) -> Self {
        Self { entries, open: None }
    }

    /// Header clicked. Closes every item, then opens `index` unless it
    /// was the one already open. Out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            log::debug!("Accordion: no item {index}");
            return false;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
        true
    }

    /// Parse a query value and toggle that item.
    pub fn toggle_raw(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<usize>() {
            Ok(index) => self.toggle(index),
            Err(_) => false,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn items(&self, page: &str, anchor: &str) -> Vec<FaqItemView> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let is_open = self.is_open(index);
                let toggle_href = if is_open {
                    format!("{page}#{anchor}")
                } else {
                    format!("{page}?frage={index}#{anchor}")
                };
                FaqItemView {
                    index,
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                    is_open,
                    toggle_href,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<FaqEntry> {
        (0..n)
            .map(|i| FaqEntry { question: format!("Frage {i}"), answer: format!("Antwort {i}") })
            .collect()
    }

    #[test]
    fn starts_collapsed() {
        let faq = entries(3);
        let accordion = Accordion::new(&faq);
        assert_eq!(accordion.open_index(), None);
        assert!(accordion.items("/kontakt", "faq").iter().all(|i| !i.is_open));
    }

    #[test]
    fn opening_one_item_closes_the_other() {
        let faq = entries(3);
        let mut accordion = Accordion::new(&faq);
        assert!(accordion.toggle(0));
        assert!(accordion.toggle(2));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
        let open: Vec<usize> = accordion
            .items("/kontakt", "faq")
            .iter()
            .filter(|i| i.is_open)
            .map(|i| i.index)
            .collect();
        assert_eq!(open, vec![2]);
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let faq = entries(2);
        let mut accordion = Accordion::new(&faq);
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn out_of_range_and_malformed_triggers_are_ignored() {
        let faq = entries(2);
        let mut accordion = Accordion::new(&faq);
        accordion.toggle(0);
        assert!(!accordion.toggle(2));
        assert!(!accordion.toggle_raw("zwei"));
        assert!(!accordion.toggle_raw("-1"));
        assert_eq!(accordion.open_index(), Some(0));
    }

    #[test]
    fn links_open_or_collapse() {
        let faq = entries(2);
        let mut accordion = Accordion::new(&faq);
        accordion.toggle_raw(" 1 ");
        let items = accordion.items("/kontakt", "faq");
        assert_eq!(items[0].toggle_href, "/kontakt?frage=0#faq");
        assert_eq!(items[1].toggle_href, "/kontakt#faq");
    }
}
