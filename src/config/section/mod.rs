//! Configuration section definitions.
//!
//! Each module corresponds to a section in `inkpress.toml`:
//!
//! | Module       | TOML Section   | Purpose                          |
//! |--------------|----------------|----------------------------------|
//! | `site`       | `[site]`       | Site identity, pagination, edit  |
//! | `locale`     | `[locale]`     | Language and BCP 47 tags         |
//! | `logo`       | `[logo]`       | Header logo image                |
//! | `socials`    | `[[socials]]`  | Social network links             |
//! | `discussion` | `[discussion]` | Comment widget settings          |

mod discussion;
mod locale;
mod logo;
mod site;
mod socials;

pub use discussion::{DiscussionConfig, InputPosition, Loading, Mapping, Toggle};
pub use locale::LocaleConfig;
pub use logo::LogoConfig;
pub use site::{DEFAULT_OG_IMAGE, EditPostConfig, SiteInfoConfig};
pub use socials::{SocialEntry, SocialNetwork, active_socials, validate_socials};

pub(crate) use socials::default_socials;
