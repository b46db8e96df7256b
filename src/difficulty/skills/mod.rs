pub use self::stamina::Stamina;

mod stamina;
