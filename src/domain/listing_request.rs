use crate::domain::rendered_email::{detail, layout};
use crate::domain::{Field, RenderedEmail};

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingRequest {
    pub name: Field,
    pub email: Field,
    pub phone: Field,
    pub year: Field,
    pub make: Field,
    pub model: Field,
    pub mileage: Field,
    pub price: Field,
    pub condition: Field,
    pub description: Field,
    pub images: Field,
}

impl ListingRequest {
    pub fn admin_email(&self) -> RenderedEmail {
        let mut body = String::new();
        body.push_str(&detail("Name", &self.name));
        body.push_str(&detail("Email", &self.email));
        body.push_str(&detail("Phone", &self.phone));
        body.push_str(&detail("Year", &self.year));
        body.push_str(&detail("Make", &self.make));
        body.push_str(&detail("Model", &self.model));
        body.push_str(&detail("Mileage", &self.mileage));
        body.push_str(&detail("Asking Price", &self.price));
        body.push_str(&detail("Condition", &self.condition));
        body.push_str(&detail("Description", &self.description));
        body.push_str("  <h3>Photos</h3>\n");
        body.push_str(&self.gallery());

        RenderedEmail::admin_notification(
            format!(
                "New Car Listing Request: {} {} {}",
                self.year, self.make, self.model
            ),
            layout("New Listing Request", &body),
            &self.name,
        )
    }

    pub fn acknowledgment_email(&self) -> RenderedEmail {
        let body = format!(
            "  <p>Hi {name},</p>\n  <p>Thanks for submitting your {year} {make} {model}. Our team will review the details and photos and contact you about next steps.</p>\n",
            name = self.name.raw_html(),
            year = self.year.raw_html(),
            make = self.make.raw_html(),
            model = self.model.raw_html()
        );

        RenderedEmail::acknowledgment(
            "We received your listing request".to_string(),
            layout("Listing request received", &body),
            &self.name,
        )
    }

    fn gallery(&self) -> String {
        let urls = self.images.string_items();
        if urls.is_empty() {
            return "  <p style=\"color: #777;\">No photos uploaded</p>\n".to_string();
        }

        let mut gallery =
            String::from("  <div style=\"display: flex; flex-wrap: wrap; gap: 8px;\">\n");
        for url in urls {
            gallery.push_str(&format!(
                "    <img src=\"{}\" alt=\"Vehicle photo\" style=\"width: 180px; height: auto; border-radius: 4px;\" />\n",
                Field::new(url).raw_html()
            ));
        }
        gallery.push_str("  </div>\n");
        gallery
    }
}
