//! # Crop analysis state container
//!
//! Holds the last result of each analysis the farmer ran. Results are
//! transient: nothing here is persisted, and [`CropStore::clear_results`]
//! drops them all.
//!
//! Image uploads are validated locally first (see [`crate::upload`]); an
//! invalid image is reported and never sent.

use std::sync::Arc;

use api::{
    ApiClient, ApiError, CancelToken, CropRecommendation, DiseaseResult, PestResult,
    RecommendationRequest, Transport, YieldPrediction, YieldRequest,
};

use crate::cell::StateCell;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::upload::ImageUpload;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropState {
    pub recommendations: Vec<CropRecommendation>,
    pub disease: Option<DiseaseResult>,
    pub pest: Option<PestResult>,
    pub yield_prediction: Option<YieldPrediction>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct CropStore<T, C> {
    client: ApiClient<T>,
    state: C,
    notifier: Arc<dyn Notifier>,
}

impl<T, C> CropStore<T, C>
where
    T: Transport,
    C: StateCell<CropState>,
{
    pub fn new(client: ApiClient<T>, state: C, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            state,
            notifier,
        }
    }

    pub fn state(&self) -> CropState {
        self.state.get()
    }

    pub async fn detect_disease(
        &self,
        image: ImageUpload,
        crop_type: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<DiseaseResult> {
        self.validate(&image)?;
        self.begin();
        tracing::debug!(file = %image.file_name, size = image.size(), "uploading image for disease detection");
        let result = self
            .client
            .crops()
            .detect_disease(&image.file_name, &image.content_type, image.bytes, crop_type, cancel)
            .await;
        match result {
            Ok(result) => {
                self.state.update(|s| {
                    s.disease = Some(result.clone());
                    s.loading = false;
                });
                self.notifier.success("Disease analysis complete");
                Ok(result)
            }
            Err(e) => Err(self.fail(e, "Failed to analyze image")),
        }
    }

    pub async fn detect_pest(
        &self,
        image: ImageUpload,
        crop_type: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<PestResult> {
        self.validate(&image)?;
        self.begin();
        let result = self
            .client
            .crops()
            .detect_pest(&image.file_name, &image.content_type, image.bytes, crop_type, cancel)
            .await;
        match result {
            Ok(result) => {
                self.state.update(|s| {
                    s.pest = Some(result.clone());
                    s.loading = false;
                });
                self.notifier.success("Pest analysis complete");
                Ok(result)
            }
            Err(e) => Err(self.fail(e, "Failed to analyze image")),
        }
    }

    pub async fn recommend_crops(
        &self,
        request: &RecommendationRequest,
        cancel: &CancelToken,
    ) -> Result<Vec<CropRecommendation>> {
        self.begin();
        match self.client.crops().recommend(request, cancel).await {
            Ok(recommendations) => {
                self.state.update(|s| {
                    s.recommendations = recommendations.clone();
                    s.loading = false;
                });
                Ok(recommendations)
            }
            Err(e) => Err(self.fail(e, "Failed to get crop recommendations")),
        }
    }

    pub async fn predict_yield(
        &self,
        request: &YieldRequest,
        cancel: &CancelToken,
    ) -> Result<YieldPrediction> {
        self.begin();
        match self.client.crops().predict_yield(request, cancel).await {
            Ok(prediction) => {
                self.state.update(|s| {
                    s.yield_prediction = Some(prediction.clone());
                    s.loading = false;
                });
                Ok(prediction)
            }
            Err(e) => Err(self.fail(e, "Failed to predict yield")),
        }
    }

    pub fn clear_results(&self) {
        self.state.update(|s| {
            s.recommendations.clear();
            s.disease = None;
            s.pest = None;
            s.yield_prediction = None;
        });
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn validate(&self, image: &ImageUpload) -> Result<()> {
        if let Err(e) = image.validate() {
            tracing::info!(file = %image.file_name, "rejected upload: {e}");
            let message = e.to_string();
            self.state.update(|s| s.error = Some(message.clone()));
            self.notifier.error(&message);
            return Err(Error::Validation(e));
        }
        Ok(())
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, e: ApiError, fallback: &str) -> Error {
        if e.is_cancelled() {
            self.state.update(|s| s.loading = false);
            return e.into();
        }
        let message = e.user_message(fallback);
        tracing::warn!("{fallback}: {e}");
        self.state.update(|s| {
            s.loading = false;
            s.error = Some(message.clone());
        });
        self.notifier.error(&message);
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::LocalCell;
    use crate::testing::{mock_client, RecordingNotifier};
    use crate::upload::{ValidationError, MAX_IMAGE_BYTES};
    use api::testing::MockTransport;
    use api::Method;
    use serde_json::json;

    fn store() -> (
        MockTransport,
        RecordingNotifier,
        CropStore<MockTransport, LocalCell<CropState>>,
    ) {
        let (mock, client) = mock_client();
        let notifier = RecordingNotifier::default();
        let store = CropStore::new(
            client,
            LocalCell::new(CropState::default()),
            Arc::new(notifier.clone()),
        );
        (mock, notifier, store)
    }

    #[tokio::test]
    async fn test_oversized_image_is_rejected_without_a_request() {
        let (mock, notifier, store) = store();
        let image = ImageUpload::new(
            "huge.png",
            Some("image/png"),
            vec![0; MAX_IMAGE_BYTES as usize + 1],
        );

        let err = store
            .detect_disease(image, None, &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooLarge { .. })
        ));
        assert_eq!(mock.request_count(), 0);
        assert!(store.state().error.is_some());
        assert_eq!(notifier.toasts().len(), 1);
    }

    #[tokio::test]
    async fn test_non_image_is_rejected_without_a_request() {
        let (mock, _notifier, store) = store();
        let file = ImageUpload::new("report.pdf", Some("application/pdf"), vec![1, 2, 3]);

        let err = store
            .detect_pest(file, None, &CancelToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.user_message("x"), "Please upload an image file");
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_detect_disease_stores_result() {
        let (mock, _notifier, store) = store();
        mock.respond(
            Method::Post,
            "/api/v1/crops/disease-detection/",
            200,
            json!({"is_healthy": false, "disease": "Early Blight", "confidence": 0.92,
                   "treatments": ["Remove infected leaves"]}),
        );
        let image = ImageUpload::new("leaf.jpg", None, vec![0xff, 0xd8, 0xff]);

        let result = store
            .detect_disease(image, Some("tomato"), &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(result.confidence_percent(), 92);
        let state = store.state();
        assert_eq!(state.disease.unwrap().headline(), "Early Blight");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_recommendations_and_clear_results() {
        let (mock, _notifier, store) = store();
        mock.respond(
            Method::Post,
            "/api/v1/crops/recommendations/",
            200,
            json!({"recommendations": [{"crop": "rice", "confidence": 0.81},
                                        {"crop": "jute", "confidence": 0.12}]}),
        );
        let request = RecommendationRequest {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            temperature: 20.8,
            humidity: 82.0,
            ph: 6.5,
            rainfall: 202.9,
        };

        let recs = store.recommend_crops(&request, &CancelToken::new()).await.unwrap();
        assert_eq!(recs[0].crop, "rice");
        assert_eq!(store.state().recommendations.len(), 2);

        store.clear_results();
        assert_eq!(store.state(), CropState::default());
    }

    #[tokio::test]
    async fn test_yield_failure_is_reported() {
        let (mock, _notifier, store) = store();
        mock.respond(
            Method::Post,
            "/api/v1/crops/yield-prediction/",
            500,
            json!({"error": "model unavailable"}),
        );
        let request = YieldRequest {
            crop_type: "wheat".into(),
            area: 10.0,
            ..Default::default()
        };

        assert!(store.predict_yield(&request, &CancelToken::new()).await.is_err());
        assert_eq!(store.state().error.as_deref(), Some("model unavailable"));

        store.clear_error();
        assert!(store.state().error.is_none());
    }
}
