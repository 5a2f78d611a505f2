use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide settings singleton. Missing fields in the stored document are
/// filled from [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub social_media: SocialMedia,
    pub seo: Seo,
    pub footer: Footer,
    pub features: Features,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub year: i32,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub products_title: String,
    pub corporate_title: String,
    pub contact_title: String,
    pub products_links_texts: Vec<String>,
    pub corporate_links_texts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub show_prices: bool,
    pub enable_catalog_download: bool,
    pub show_contact_form: bool,
    pub enable_newsletter: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub social_media: Option<SocialMediaPatch>,
    pub seo: Option<SeoPatch>,
    pub footer: Option<FooterPatch>,
    pub features: Option<FeaturesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPatch {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPatch {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPatch {
    pub year: Option<i32>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub products_title: Option<String>,
    pub corporate_title: Option<String>,
    pub contact_title: Option<String>,
    pub products_links_texts: Option<Vec<String>>,
    pub corporate_links_texts: Option<Vec<String>>,
    pub copyright_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesPatch {
    pub show_prices: Option<bool>,
    pub enable_catalog_download: Option<bool>,
    pub show_contact_form: Option<bool>,
    pub enable_newsletter: Option<bool>,
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Settings {
    pub fn merge(&mut self, patch: SettingsPatch) {
        replace(&mut self.site_name, patch.site_name);
        replace(&mut self.site_description, patch.site_description);
        replace(&mut self.contact_email, patch.contact_email);
        replace(&mut self.contact_phone, patch.contact_phone);
        replace(&mut self.contact_address, patch.contact_address);

        if let Some(social_media) = patch.social_media {
            self.social_media.merge(social_media);
        }
        if let Some(seo) = patch.seo {
            self.seo.merge(seo);
        }
        if let Some(footer) = patch.footer {
            self.footer.merge(footer);
        }
        if let Some(features) = patch.features {
            self.features.merge(features);
        }
    }
}

impl SocialMedia {
    pub fn merge(&mut self, patch: SocialMediaPatch) {
        replace(&mut self.facebook, patch.facebook);
        replace(&mut self.instagram, patch.instagram);
        replace(&mut self.linkedin, patch.linkedin);
        replace(&mut self.twitter, patch.twitter);
        if patch.youtube.is_some() {
            self.youtube = patch.youtube;
        }
        if patch.tiktok.is_some() {
            self.tiktok = patch.tiktok;
        }
    }
}

impl Seo {
    pub fn merge(&mut self, patch: SeoPatch) {
        replace(&mut self.meta_title, patch.meta_title);
        replace(&mut self.meta_description, patch.meta_description);
        replace(&mut self.keywords, patch.keywords);
    }
}

impl Footer {
    pub fn merge(&mut self, patch: FooterPatch) {
        replace(&mut self.year, patch.year);
        replace(&mut self.company, patch.company);
        replace(&mut self.address, patch.address);
        replace(&mut self.phone, patch.phone);
        replace(&mut self.email, patch.email);
        replace(&mut self.products_title, patch.products_title);
        replace(&mut self.corporate_title, patch.corporate_title);
        replace(&mut self.contact_title, patch.contact_title);
        replace(&mut self.products_links_texts, patch.products_links_texts);
        replace(&mut self.corporate_links_texts, patch.corporate_links_texts);
        if patch.copyright_text.is_some() {
            self.copyright_text = patch.copyright_text;
        }
    }
}

impl Features {
    pub fn merge(&mut self, patch: FeaturesPatch) {
        replace(&mut self.show_prices, patch.show_prices);
        replace(&mut self.enable_catalog_download, patch.enable_catalog_download);
        replace(&mut self.show_contact_form, patch.show_contact_form);
        replace(&mut self.enable_newsletter, patch.enable_newsletter);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "Sarda Tekstil".to_string(),
            site_description:
                "Geleneksel sanatın modern yorumu ile kaliteli tekstil ürünleri üretiyoruz."
                    .to_string(),
            contact_email: "info@sardatekstil.com".to_string(),
            contact_phone: "+90 342 123 45 67".to_string(),
            contact_address:
                "Gaziantep Organize Sanayi Bölgesi, 1. Cadde No: 25, 27000 Şehitkamil / Gaziantep"
                    .to_string(),
            social_media: SocialMedia::default(),
            seo: Seo::default(),
            footer: Footer::default(),
            features: Features::default(),
        }
    }
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            meta_title: "Sarda Tekstil - Kilim ve Bukle Üretimi".to_string(),
            meta_description: "Gaziantep'te 25 yıldır kaliteli kilim ve bukle üretimi yapan Sarda Tekstil. Geleneksel sanatın modern yorumu.".to_string(),
            keywords: "kilim, bukle, tekstil, Gaziantep, el dokuma".to_string(),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            year: Utc::now().year(),
            company: "Sarda Tekstil".to_string(),
            address: "Gaziantep, Türkiye".to_string(),
            phone: "+90 342 123 45 67".to_string(),
            email: "info@sardatekstil.com".to_string(),
            products_title: "Ürünler".to_string(),
            corporate_title: "Kurumsal".to_string(),
            contact_title: "İletişim".to_string(),
            products_links_texts: vec![
                "Kilim Koleksiyonu".to_string(),
                "Bukle Serisi".to_string(),
                "Özel Tasarım".to_string(),
            ],
            corporate_links_texts: vec![
                "Hakkımızda".to_string(),
                "Kalite Politikası".to_string(),
                "Sürdürülebilirlik".to_string(),
            ],
            copyright_text: Some("Tüm hakları saklıdır.".to_string()),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            show_prices: false,
            enable_catalog_download: true,
            show_contact_form: true,
            enable_newsletter: false,
        }
    }
}
