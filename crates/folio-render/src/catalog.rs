//! Site content: the profile, the projects gallery and the research listing.
//!
//! `Catalog::builtin()` is the content the site ships with. A TOML content
//! file with the same shape can replace it:
//!
//! ```toml
//! [profile]
//! name = "Ada"
//! headline = "Hello!"
//! intro = ["First paragraph.", "Second paragraph."]
//! email = "ada@example.com"
//! links = [{ label = "GitHub", url = "https://github.com/ada" }]
//!
//! [[projects]]
//! title = "Analytical Engine"
//! tags = ["Hardware"]
//!
//! [[papers]]
//! title = "Notes"
//! authors = ["Ada Lovelace"]
//! year = 1843
//! ```

use std::path::Path;

use folio_common::{FolioError, Link, PaperRecord, ProjectRecord, RecordError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub intro: Vec<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Fadhel".to_string(),
            headline: "Welcome to my page! 🔥🔥🔥".to_string(),
            intro: vec![
                "Hi, my name is Fadhel! I'm a dedicated AI Engineer with over two years of experience in the field. \
                 My passion lies in crafting innovative solutions with AI, and I'm always eager to expand my knowledge and skills."
                    .to_string(),
                "In my free time, you can find me pushing the limits as a hardstuck Diamond 1 player in Valorant 😂."
                    .to_string(),
                "I hold a degree in Computer Engineering from Brawijaya University. \
                 Throughout my career, I've worked with various companies, delivering impactful solutions that drive meaningful change."
                    .to_string(),
            ],
            email: Some("fadhel1597@gmail.com".to_string()),
            links: vec![
                Link::new("GitHub", "https://github.com/FadhelHaidar"),
                Link::new("LinkedIn", "https://linkedin.com/in/fadhel-haidar"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub papers: Vec<PaperRecord>,
}

impl Catalog {
    /// Parse a content file. Every record is validated on the way in.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::Config(format!("content file not found: {}", path.display())));
        }
        let catalog = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            papers = catalog.papers.len(),
            "loaded content file"
        );
        Ok(catalog)
    }

    /// The content the site ships with.
    pub fn builtin() -> std::result::Result<Self, RecordError> {
        Ok(Self {
            profile: Profile::default(),
            projects: builtin_projects()?,
            papers: builtin_papers()?,
        })
    }
}

fn builtin_projects() -> std::result::Result<Vec<ProjectRecord>, RecordError> {
    Ok(vec![
        ProjectRecord::builder("Skin Analysis AI")
            .tags(["Computer Vision"])
            .description(
                "A feature that uses DETR object detection model with a custom dataset to identify acne \
                 problems, InceptionV3 for wrinkle classification, mediapipe for facial landmark detection, \
                 and VGG16 for skin type classification. The same method for wrinkle detection is applied to \
                 detect dark circles under the eyes.",
            )
            .key_features(["Object Detection", "Landmark Detection", "Image Classification"])
            .technologies(["Flask API", "Tensorflow", "Transformers"])
            .video_url("https://www.youtube.com/embed/sdrObaXCZVc")
            .build()?,
        ProjectRecord::builder("Facial Ratio Measurement AI")
            .tags(["Computer Vision"])
            .description(
                "Using EfficientNetV2, the system can classify the shape of the face. It also calculates the width-\
                 to-length ratio of the face using Euclidean Distance to measure the distance between facial landmarks.",
            )
            .key_features(["Object Detection", "Landmark Detection", "Image Classification"])
            .technologies(["Flask API", "Tensorflow", "Transformers"])
            .video_url("https://www.youtube.com/embed/qANcUrKSWHU")
            .build()?,
        ProjectRecord::builder("Human Tracking System for Smart Wheelchair")
            .tags(["Computer Vision", "Robotics"])
            .description(
                "The system Leveraging YOLOv5 and byte track to create auto navigation by following human \
                 in front of the smart wheelchair captured by web camera. The system is embedded to Nvidia \
                 Jetson TX2.",
            )
            .key_features(["Object Detection", "Object Tracking"])
            .technologies(["Nvidia Jetson", "Arduino", "Pytorch"])
            .video_url("https://youtu.be/F_w_tT8pDR4")
            .build()?,
        ProjectRecord::builder("Room Name Recognition System")
            .tags(["Computer Vision", "Robotics"])
            .description(
                "The system contained object detection to detect the plate using YOLOv5 and read/recognize \
                 the plate character using EasyOCR, the object captured using web camera. The system is \
                 embedded to Nvidia Jetson TX2.",
            )
            .key_features(["Object Detection", "OCR"])
            .technologies(["Nvidia Jetson", "Arduino", "Pytorch"])
            .video_url("https://youtu.be/HYcV47oXoCE")
            .build()?,
    ])
}

fn builtin_papers() -> std::result::Result<Vec<PaperRecord>, RecordError> {
    Ok(vec![
        PaperRecord::builder(
            "A convolutional neural network-VGG16 method for corrosion inhibition of 304SS in sulfuric acid \
             solution by timoho leaf extract",
            2024,
        )
        .authors([
            "Femiana Gapsari",
            "Fitri Utaminingrum",
            "Chin Wei Lai",
            "Khairul Anam",
            "Abdul M. Sulaiman",
            "Muhamad F. Haidar",
            "Tobias S. Julian",
            "Eno E. Ebenso",
        ])
        .publication("Journal of Materials Research and Technology")
        .abstract_text(
            "A corrosion inhibition test, coupled with a quantification of in-situ H2 evolution, can be used to \
             evaluate an organic inhibitor such as Timoho leaf extract (TLE). TLE is a biodegradable and effective \
             corrosion inhibitor because of its potential to protect 304SS against sulfuric acid. TLE corrosion \
             inhibitor was studied through systematic electrochemical experiments and morphological \
             characterization, with a concentration range of 0–6g L−1. Convolutional Neural Network (CNN)-VGG16 \
             was one of the machine learning approaches used to classify and predict physical changes in hydrogen \
             gas bubbles. Constituents of the TLE and 304SS surfaces were analyzed by FT-IR and UV–Vis tests. The \
             results suggested that 3 g L−1 TLE inhibitor was able to reduce the corrosion rate by 99.37 %. The \
             TLE's inhibition mechanism on 304SS was mixed adsorption and mixed type inhibitor that followed the \
             Isothermal Freundlich Equation. The prediction model by CNN-VGG16 for corrosion tests at varied \
             inhibitor doses was 96% accurate. SEM tests revealed that TLE constituent adsorption on the 304SS \
             surface had a smooth surface morphology with few degraded spots.",
        )
        .tags(["Computer Vision", "Deep Learning"])
        .methodologies(["VGG16"])
        .pdf_url("https://www.sciencedirect.com/science/article/pii/S2238785424006859")
        .link("DOI", "https://doi.org/10.1016/j.jmrt.2024.03.156")
        .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.projects.len(), 4);
        assert_eq!(catalog.papers.len(), 1);
        assert_eq!(catalog.projects[0].title(), "Skin Analysis AI");
        assert_eq!(catalog.papers[0].authors().len(), 8);
        assert_eq!(catalog.profile.links[0].label, "GitHub");
    }

    #[test]
    fn test_content_file_defaults_profile() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[projects]]
            title = "Only project"
            tags = ["Rust"]
            links = [{ label = "Live Demo", url = "https://example.com" }]
            "#,
        )
        .unwrap();
        assert_eq!(catalog.profile, Profile::default());
        assert_eq!(catalog.projects.len(), 1);
        assert!(catalog.papers.is_empty());
    }

    #[test]
    fn test_invalid_record_rejected() {
        let err = Catalog::from_toml_str(
            r#"
            [[projects]]
            title = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::Toml(_)));
        assert!(err.to_string().contains("title must not be blank"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, "[profile]\nname = \"Ada\"\nheadline = \"Hi\"\n").unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.profile.name, "Ada");
        assert!(catalog.profile.email.is_none());

        assert!(Catalog::load(&dir.path().join("missing.toml")).is_err());
    }
}
