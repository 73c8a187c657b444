//! GEDCOM tag constants.
//!
//! Only this fixed vocabulary is interpreted when extracting records;
//! every other tag is kept in the forest but ignored by extraction.

// Record tags
/// Individual record "INDI"
pub const INDIVIDUAL: &str = "INDI";

/// Family record "FAM"
pub const FAMILY: &str = "FAM";

/// Note record or note citation "NOTE"
pub const NOTE: &str = "NOTE";

/// Source record or source citation "SOUR"
pub const SOURCE: &str = "SOUR";

// Individual fields
/// Personal name "NAME"
pub const NAME: &str = "NAME";

/// Sex "SEX"
pub const SEX: &str = "SEX";

/// Family in which the individual is a child "FAMC"
pub const FAMILY_CHILD: &str = "FAMC";

/// Family in which the individual is a spouse "FAMS"
pub const FAMILY_SPOUSE: &str = "FAMS";

// Family fields
/// Husband "HUSB"
pub const HUSBAND: &str = "HUSB";

/// Wife "WIFE"
pub const WIFE: &str = "WIFE";

/// Child "CHIL"
pub const CHILD: &str = "CHIL";

// Events
/// Tags that produce an event on an individual
pub const INDIVIDUAL_EVENTS: &[&str] = &["BIRT", "DEAT"];

/// Tags that produce an event on a family
pub const FAMILY_EVENTS: &[&str] = &["MARR"];

/// Date of an event "DATE"
pub const DATE: &str = "DATE";

/// Place of an event "PLAC"
pub const PLACE: &str = "PLAC";

// Continuation
/// Continuation on a new line "CONT"
pub const CONTINUATION: &str = "CONT";

/// Continuation on the same line "CONC"
pub const CONCATENATION: &str = "CONC";
