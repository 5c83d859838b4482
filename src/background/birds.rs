use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::lifecycle::{EffectFactory, EffectHandle};
use crate::error::EffectError;

#[wasm_bindgen]
extern "C" {
    // Provided by vanta.birds.min.js once it has loaded.
    type VantaInstance;

    #[wasm_bindgen(catch, js_namespace = VANTA, js_name = BIRDS)]
    fn vanta_birds(options: &JsValue) -> Result<VantaInstance, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &VantaInstance) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorMode {
    Lerp,
    Variance,
    LerpGradient,
    VarianceGradient,
}

/// Options passed to `VANTA.BIRDS`, minus the mount element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdsConfig {
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    pub background_color: u32,
    pub color1: u32,
    pub color2: u32,
    pub color_mode: ColorMode,
    pub bird_size: f64,
    pub wing_span: f64,
    pub speed_limit: f64,
    pub separation: f64,
    pub alignment: f64,
    pub cohesion: f64,
    pub quantity: f64,
}

impl Default for BirdsConfig {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            background_color: 0xffffff,
            color1: 0x3b82f6, // blue-500
            color2: 0x6366f1, // indigo-500
            color_mode: ColorMode::Lerp,
            bird_size: 1.2,
            wing_span: 20.0,
            speed_limit: 5.0,
            separation: 50.0,
            alignment: 50.0,
            cohesion: 50.0,
            quantity: 4.0,
        }
    }
}

impl BirdsConfig {
    /// Builds the JS options object with `el` pointing at `target`.
    pub fn to_options(&self, target: &Element) -> Result<JsValue, EffectError> {
        let json = serde_json::to_string(self)?;
        let options = js_sys::JSON::parse(&json).map_err(|e| EffectError::Js(format!("{e:?}")))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("el"), target)
            .map_err(|e| EffectError::Js(format!("{e:?}")))?;
        Ok(options)
    }
}

/// Factory for the vanta.js birds effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VantaBirds {
    pub config: BirdsConfig,
}

impl EffectFactory for VantaBirds {
    type Target = Element;
    type Handle = VantaEffect;

    fn create(&self, target: &Element) -> Result<VantaEffect, EffectError> {
        let options = self.config.to_options(target)?;
        let instance =
            vanta_birds(&options).map_err(|e| EffectError::Unavailable(format!("{e:?}")))?;
        Ok(VantaEffect { instance })
    }
}

pub struct VantaEffect {
    instance: VantaInstance,
}

impl EffectHandle for VantaEffect {
    fn destroy(self) {
        if let Err(e) = self.instance.destroy() {
            log::warn!("vanta destroy threw: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_config_serializes_to_vanta_option_names() {
        let value = serde_json::to_value(BirdsConfig::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "mouseControls": true,
                "touchControls": true,
                "gyroControls": false,
                "minHeight": 200.0,
                "minWidth": 200.0,
                "scale": 1.0,
                "scaleMobile": 1.0,
                "backgroundColor": 16777215,
                "color1": 3900150,
                "color2": 6514417,
                "colorMode": "lerp",
                "birdSize": 1.2,
                "wingSpan": 20.0,
                "speedLimit": 5.0,
                "separation": 50.0,
                "alignment": 50.0,
                "cohesion": 50.0,
                "quantity": 4.0
            })
        );
    }

    #[test]
    fn gradient_color_modes_use_camel_case() {
        assert_eq!(
            serde_json::to_value(ColorMode::LerpGradient).unwrap(),
            json!("lerpGradient")
        );
        assert_eq!(
            serde_json::to_value(ColorMode::VarianceGradient).unwrap(),
            json!("varianceGradient")
        );
    }

    #[test]
    fn factory_uses_fixed_tunables() {
        let birds = VantaBirds::default();
        assert_eq!(birds.config.quantity, 4.0);
        assert_eq!(birds.config.speed_limit, 5.0);
        assert!(birds.config.mouse_controls && birds.config.touch_controls);
        assert!(!birds.config.gyro_controls);
    }
}
