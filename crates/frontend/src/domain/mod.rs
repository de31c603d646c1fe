pub mod a001_factory;
pub mod a002_section;
pub mod a003_equipment;
