pub mod sun_path;
pub mod sun_times;
