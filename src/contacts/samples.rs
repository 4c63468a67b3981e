//! Sample contacts loaded at startup.

use super::book::ContactBook;
use crate::models::NewContact;
use chrono::NaiveDate;
use tracing::{info, warn};

/// (first, last, company, mobile, email, (year, month, day))
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32),
);

const SAMPLE_CONTACTS: &[SampleRow] = &[
    ("Emily", "Blackwell", "Dublin Business School", "871111111", "emily.blackwell@dbs.ie", (1990, 1, 1)),
    ("James", "Murphy", "TechCorp Ltd", "872222222", "james.murphy@techcorp.ie", (1985, 3, 15)),
    ("Sarah", "O'Connor", "Green Energy Solutions", "873333333", "sarah.oconnor@greenenergy.ie", (1992, 7, 22)),
    ("Michael", "Walsh", "Dublin City Council", "874444444", "michael.walsh@dcc.ie", (1988, 11, 30)),
    ("Lisa", "Brennan", "Healthcare Plus", "875555555", "lisa.brennan@healthcare.ie", (1995, 5, 8)),
    ("David", "Kelly", "Financial Services Group", "876666666", "david.kelly@fsg.ie", (1983, 9, 17)),
    ("Emma", "Ryan", "Digital Marketing Agency", "877777777", "emma.ryan@digitalma.ie", (1991, 2, 14)),
    ("Patrick", "Doyle", "Construction Ltd", "878888888", "patrick.doyle@construction.ie", (1987, 12, 25)),
    ("Aoife", "McCarthy", "Trinity College Dublin", "879999999", "aoife.mccarthy@tcd.ie", (1993, 4, 3)),
    ("Sean", "O'Brien", "Restaurant Group", "871234567", "sean.obrien@restaurant.ie", (1989, 8, 19)),
    ("Claire", "Fitzgerald", "Law Firm Associates", "872345678", "claire.fitzgerald@lawfirm.ie", (1986, 6, 11)),
    ("Conor", "Gallagher", "Sports Academy", "873456789", "conor.gallagher@sports.ie", (1994, 10, 7)),
    ("Niamh", "Collins", "Art Gallery Dublin", "874567890", "niamh.collins@artgallery.ie", (1990, 1, 28)),
    ("Brian", "Kennedy", "Insurance Ireland", "875678901", "brian.kennedy@insurance.ie", (1984, 5, 16)),
    ("Rachel", "Byrne", "Travel Agency", "876789012", "rachel.byrne@travel.ie", (1992, 9, 23)),
    ("Kevin", "Nolan", "Engineering Solutions", "877890123", "kevin.nolan@engineering.ie", (1988, 3, 12)),
    ("Michelle", "Dunne", "Fashion Retail", "878901234", "michelle.dunne@fashion.ie", (1991, 7, 5)),
    ("Thomas", "Quinn", "Pharmaceutical Research", "879012345", "thomas.quinn@pharma.ie", (1987, 11, 18)),
    ("Jennifer", "Lynch", "Media Production", "871111222", "jennifer.lynch@media.ie", (1993, 2, 9)),
    ("Daniel", "Kavanagh", "Real Estate Services", "872222333", "daniel.kavanagh@realestate.ie", (1985, 12, 27)),
    ("Sinead", "Moore", "University College Cork", "873333444", "sinead.moore@ucc.ie", (1990, 4, 14)),
];

impl ContactBook {
    /// Create a contact book pre-filled with the sample contacts (ids 1 to 21).
    ///
    /// Samples go through the normal validated add path; a rejected row is
    /// logged and skipped.
    pub fn with_sample_contacts() -> Self {
        let mut book = Self::new();

        for &(first, last, company, mobile, email, (y, m, d)) in SAMPLE_CONTACTS {
            let Some(birthdate) = NaiveDate::from_ymd_opt(y, m, d) else {
                warn!(first, last, "Skipping sample contact with impossible birthdate");
                continue;
            };
            let fields = NewContact::new(first, last, company, mobile, email, birthdate);
            if let Err(e) = book.add(fields) {
                warn!(first, last, error = %e, "Skipping invalid sample contact");
            }
        }

        info!("Loaded {} sample contacts", book.len());
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;

    #[test]
    fn test_all_samples_load() {
        let book = ContactBook::with_sample_contacts();
        assert_eq!(book.len(), SAMPLE_CONTACTS.len());
        assert_eq!(book.len(), 21);
        assert_eq!(book.next_id(), ContactId::new(22));
        assert_eq!(
            book.get(ContactId::FIRST).unwrap().full_name(),
            "Emily Blackwell"
        );
    }
}
