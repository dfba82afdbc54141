// Business contact details referenced across pages. Changing the phone
// number or booking address happens in exactly one place.

pub const BUSINESS_NAME: &str = "Thorstenson Guide Service";

pub const PHONE_DISPLAY: &str = "(123) 456-7890";
pub const PHONE_URI: &str = "tel:+1234567890";

pub const BOOKING_EMAIL: &str = "book@thorstenson.guide";
pub const BOOKING_EMAIL_URI: &str = "mailto:book@thorstenson.guide";

pub const INSTAGRAM_HANDLE: &str = "@thorstenson_guide";
pub const INSTAGRAM_URL: &str = "https://instagram.com/thorstenson_guide";
