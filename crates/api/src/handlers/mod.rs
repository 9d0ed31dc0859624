pub mod advert;
