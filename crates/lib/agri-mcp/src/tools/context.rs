use agri_core::clock::Clock;
use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    tool,
    tool_router,
};

use crate::{AgriMcp, helpers};

#[tool_router(router = tool_router_context, vis = "pub")]
impl<K: Clock> AgriMcp<K> {
    #[tool(description = "List the advisory tools with a short description of each.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        helpers::json_result(self.registry().descriptors())
    }

    #[tool(description = "Explains which tool to use for common farmer questions.")]
    async fn usage_help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(
r"
1. Weather questions (rain, wind, whether to spray or irrigate today): `lookup_weather` with `location`.
2. What to plant: `get_crop_recommendations` with `soil_type` (clay, sandy, loam, silt, peat),
   optional `region` and `season`. Unknown soils are answered with the loam list.
3. Sick plants: `identify_plant_disease` with the farmer's own words in `symptoms` and the `crop_type`.
   Tomato, corn and wheat have symptom tables; other crops get referral guidance.
4. What to do this season: `get_farming_calendar` with `crop_type` and optional `region`.
   The current season comes from the server clock.
5. Sustainability: `get_sustainable_practices` with `farming_type` (conventional, organic, hydroponics)
   and optional `challenge` (water conservation, soil erosion, pest management).
"
        )]))
    }
}
