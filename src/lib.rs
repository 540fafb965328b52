//! # nongli
//!
//! Conversion between the Gregorian calendar and the traditional Chinese
//! lunisolar calendar for 1900..=2100, with the customary annotations:
//! sexagenary (gan-zhi) pillars for year, month and day, the 24 solar
//! terms, zodiac animal, western zodiac sign, Chinese numeral renderings
//! and festival names.
//!
//! Everything is pure computation over two packed constant tables; no
//! call mutates shared state, so conversions may run concurrently without
//! locking. Each conversion is bounded by at most 201 year steps and 13
//! month steps.
//!
//! ## Quick start
//!
//! ```
//! use nongli::{lunar_to_solar, solar_to_lunar};
//!
//! let c = solar_to_lunar(1987, 11, 1).unwrap();
//! assert_eq!((c.lunar.year(), c.lunar.month(), c.lunar.day()), (1987, 9, 10));
//! assert_eq!(c.year_pillar.to_string(), "丁卯");
//! assert_eq!(c.animal, "兔");
//!
//! let back = lunar_to_solar(1987, 9, 10, false).unwrap();
//! assert_eq!(back.solar.to_string(), "1987-11-1");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! solar_to_lunar() / lunar_to_solar()   (convert.rs)
//!   ├─ year/month length tables          (lunar.rs, solar.rs)
//!   ├─ solar-term day decoding           (term.rs)
//!   ├─ gan-zhi pillar arithmetic         (ganzhi.rs)
//!   └─ annotation lookups                (zodiac.rs, fmt.rs, festival.rs)
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | The conversion pair and the annotated `Conversion` result |
//! | `lunar` | Packed lunar-year table, decoder queries, `LunarDate` |
//! | `solar` | Gregorian rules, `SolarDate`, day arithmetic |
//! | `term` | Packed solar-term table and decoder |
//! | `ganzhi` | Sexagenary cycle pillars |
//! | `zodiac` | Zodiac animal and western sign |
//! | `fmt` | Chinese renderings of months, days, weekdays |
//! | `festival` | Festival lookup by (month, day) |
//! | `error` | Error types |

pub mod convert;
pub mod error;
pub mod festival;
pub mod fmt;
pub mod ganzhi;
pub mod lunar;
pub mod solar;
pub mod term;
pub mod zodiac;

pub use convert::{Conversion, lunar_to_solar, solar_to_lunar};
pub use error::CalendarError;
pub use ganzhi::GanZhi;
pub use lunar::LunarDate;
pub use solar::SolarDate;
