//! In-memory model: the authoritative store plus the display filter

use crate::schema::{AddressBook, Person, Team};

/// A 1-based display index, as typed by the user.
///
/// Indices resolve against the current filtered view, not the full
/// person list. Zero is not a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Build from a 1-based value. Returns `None` for zero.
    #[must_use]
    pub fn from_one_based(value: usize) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// The 1-based value, as displayed to the user.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0
    }

    /// The 0-based value, for slice access.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0 - 1
    }
}

/// Predicate over persons selecting the displayed subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PersonFilter {
    /// Show every person
    #[default]
    All,
    /// Show persons whose name contains any of the given keywords,
    /// case-insensitively
    NameContainsAny(Vec<String>),
}

impl PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsAny(keywords) => {
                let name = person.name.to_lowercase();
                keywords.iter().any(|k| name.contains(&k.to_lowercase()))
            }
        }
    }
}

/// The session's single source of truth: the address book plus the
/// filter defining the displayed subset.
///
/// The model is passed by mutable reference into each command's execute
/// entry point; commands never hold their own copy of the store.
#[derive(Debug, Default)]
pub struct Model {
    book: AddressBook,
    filter: PersonFilter,
}

impl Model {
    /// Wrap a loaded address book with the show-all filter.
    #[must_use]
    pub fn new(book: AddressBook) -> Self {
        Self { book, filter: PersonFilter::All }
    }

    /// The backing address book (for serialization).
    #[must_use]
    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    /// Consume the model, yielding the backing address book.
    #[must_use]
    pub fn into_address_book(self) -> AddressBook {
        self.book
    }

    /// All persons, unfiltered.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.book.persons
    }

    /// All teams.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.book.teams
    }

    /// The currently displayed persons, in stored order.
    #[must_use]
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Number of persons in the current filtered view.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered_persons().len()
    }

    /// Resolve a display index against the filtered view.
    #[must_use]
    pub fn person_at(&self, index: Index) -> Option<&Person> {
        self.filtered_persons().get(index.zero_based()).copied()
    }

    /// Replace the display filter.
    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    /// Whether an equal person is already in the store.
    #[must_use]
    pub fn contains_person(&self, person: &Person) -> bool {
        self.book.persons.contains(person)
    }

    /// Add a person to the store.
    pub fn add_person(&mut self, person: Person) {
        self.book.persons.push(person);
    }

    /// Remove a person from the store and from any team member list,
    /// preserving the membership invariant. Returns whether anything
    /// was removed.
    pub fn remove_person(&mut self, person: &Person) -> bool {
        let before = self.book.persons.len();
        self.book.persons.retain(|p| p != person);
        for team in &mut self.book.teams {
            team.remove_member(person);
        }
        self.book.persons.len() != before
    }

    /// Replace `old` with `new` in the store, keyed by value equality.
    ///
    /// Team member lists referencing `old` are updated in the same step
    /// so both sides of the membership invariant move together. Returns
    /// `false` when `old` is not present (the replacement is skipped).
    pub fn set_person(&mut self, old: &Person, new: Person) -> bool {
        let Some(pos) = self.book.persons.iter().position(|p| p == old) else {
            return false;
        };
        for team in &mut self.book.teams {
            if let Some(member_pos) = team.members.iter().position(|m| m == old) {
                team.members[member_pos] = new.clone();
            }
        }
        self.book.persons[pos] = new;
        true
    }

    /// Look up a team by name.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.book.teams.iter().find(|t| t.name == name)
    }

    /// Whether a team with this name exists.
    #[must_use]
    pub fn contains_team(&self, name: &str) -> bool {
        self.team(name).is_some()
    }

    /// Add a team to the store.
    pub fn add_team(&mut self, team: Team) {
        self.book.teams.push(team);
    }

    /// Add `person` to the named team's member list. Returns `false`
    /// when the team does not exist.
    pub fn add_person_to_team(&mut self, person: &Person, team_name: &str) -> bool {
        match self.book.teams.iter_mut().find(|t| t.name == team_name) {
            Some(team) => {
                team.add_member(person.clone());
                true
            }
            None => false,
        }
    }

    /// Remove `person` from the named team's member list. Returns `false`
    /// when the team does not exist.
    pub fn remove_person_from_team(&mut self, person: &Person, team_name: &str) -> bool {
        match self.book.teams.iter_mut().find(|t| t.name == team_name) {
            Some(team) => {
                team.remove_member(person);
                true
            }
            None => false,
        }
    }

    /// Reset the address book to empty and the filter to show-all.
    pub fn clear(&mut self) {
        self.book = AddressBook::default();
        self.filter = PersonFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new("Alice Pauline", "94351253", "alice@example.com", "alicep", "alpha")
    }

    fn bob() -> Person {
        Person::new("Bob Choo", "98765432", "bob@example.com", "bobc", Team::NONE)
    }

    fn model_with_alpha() -> Model {
        let mut model = Model::default();
        let mut team = Team::new("alpha", 1_739_284_800_000);
        team.add_member(alice());
        model.add_team(team);
        model.add_person(alice());
        model.add_person(bob());
        model
    }

    #[test]
    fn test_index_is_one_based() {
        assert!(Index::from_one_based(0).is_none());
        let idx = Index::from_one_based(1).unwrap();
        assert_eq!(idx.one_based(), 1);
        assert_eq!(idx.zero_based(), 0);
    }

    #[test]
    fn test_filtered_view_resolution() {
        let mut model = model_with_alpha();
        assert_eq!(model.filtered_len(), 2);

        model.update_filter(PersonFilter::NameContainsAny(vec!["bob".to_string()]));
        assert_eq!(model.filtered_len(), 1);

        // Index 1 now resolves to Bob, not Alice
        let first = model.person_at(Index::from_one_based(1).unwrap()).unwrap();
        assert_eq!(first.name, "Bob Choo");
        assert!(model.person_at(Index::from_one_based(2).unwrap()).is_none());
    }

    #[test]
    fn test_set_person_updates_team_members() {
        let mut model = model_with_alpha();
        let updated = alice().with_team(Team::NONE);

        assert!(model.set_person(&alice(), updated.clone()));
        assert!(model.persons().contains(&updated));
        assert!(!model.persons().contains(&alice()));
        // The member list copy moved with the replacement
        assert!(model.team("alpha").unwrap().contains(&updated));
        assert!(!model.team("alpha").unwrap().contains(&alice()));
    }

    #[test]
    fn test_set_person_missing_old_is_skipped() {
        let mut model = model_with_alpha();
        let ghost = Person::new("Ghost", "000", "g@h", "gh", Team::NONE);
        assert!(!model.set_person(&ghost, bob()));
        assert_eq!(model.persons().len(), 2);
    }

    #[test]
    fn test_remove_person_strips_team_membership() {
        let mut model = model_with_alpha();
        assert!(model.remove_person(&alice()));
        assert_eq!(model.persons().len(), 1);
        assert!(model.team("alpha").unwrap().members.is_empty());
    }

    #[test]
    fn test_remove_person_from_team() {
        let mut model = model_with_alpha();
        assert!(model.remove_person_from_team(&alice(), "alpha"));
        assert!(!model.team("alpha").unwrap().contains(&alice()));
        // Person list itself is untouched
        assert_eq!(model.persons().len(), 2);

        assert!(!model.remove_person_from_team(&alice(), "missing"));
    }

    #[test]
    fn test_clear_resets_filter() {
        let mut model = model_with_alpha();
        model.update_filter(PersonFilter::NameContainsAny(vec!["bob".to_string()]));
        model.clear();
        assert!(model.persons().is_empty());
        assert!(model.teams().is_empty());
        assert_eq!(model.filtered_len(), 0);
    }
}
