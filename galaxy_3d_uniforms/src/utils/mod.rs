mod modified_stamp;

pub use modified_stamp::ModifiedStamp;
