/// Built-in clinical note served by `GET /api/sample`.
pub const SAMPLE_NOTE: &str = "Patient Name: Jane Smith
Date of Visit: August 22, 2025

Patient presents with a persistent cough and fever. She reports that the symptoms began approximately three weeks ago. The fever subsided after 5 days, but the cough has remained.

We started her on a course of Azithromycin 250mg for 5 days, which she completed yesterday.

A chest X-ray was performed today. Results are pending. We have scheduled a follow-up appointment for two weeks from now to discuss the results and next steps.

The patient also mentioned experiencing fatigue that started last month. Blood work was ordered and completed on August 20, 2025. Results showed slightly elevated white blood cell count.

Follow-up scheduled for September 5, 2025.";
