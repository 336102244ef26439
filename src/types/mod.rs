pub mod lat_long_location;
