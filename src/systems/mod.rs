#[cfg(feature="system-autoplay")]    pub mod autoplay;
#[cfg(feature="system-cost_tuning")] pub mod cost_tuning;
