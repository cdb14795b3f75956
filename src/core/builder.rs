use super::types::*;

/// Builder for billing addresses, e.g. when seeding a form with the
/// address the backend has on file.
///
/// ```
/// use storefront::core::*;
///
/// let address = BillingAddressBuilder::new("Asha Traders", "12 MG Road", "New Delhi")
///     .zip("110001")
///     .gst_no("07AAAAA0000A1Z5")
///     .state("Delhi", "DL")
///     .build();
/// assert_eq!(address.country_code, "IN");
/// ```
pub struct BillingAddressBuilder {
    draft: BillingAddressDraft,
}

impl BillingAddressBuilder {
    pub fn new(
        attention: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            draft: BillingAddressDraft {
                attention: attention.into(),
                address: address.into(),
                city: city.into(),
                country: DEFAULT_COUNTRY.to_string(),
                country_code: DEFAULT_COUNTRY_CODE.to_string(),
                ..BillingAddressDraft::default()
            },
        }
    }

    pub fn street2(mut self, street2: impl Into<String>) -> Self {
        self.draft.street2 = street2.into();
        self
    }

    /// Set the state as stored by the backend. Forms re-derive it from the
    /// GST number when editing starts.
    pub fn state(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.draft.state = name.into();
        self.draft.state_code = code.into();
        self
    }

    pub fn country(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.draft.country = name.into();
        self.draft.country_code = code.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.draft.zip = zip.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.phone = phone.into();
        self
    }

    pub fn fax(mut self, fax: impl Into<String>) -> Self {
        self.draft.fax = fax.into();
        self
    }

    pub fn gst_no(mut self, gst_no: impl Into<String>) -> Self {
        self.draft.gst_no = gst_no.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.draft.email = email.into();
        self
    }

    pub fn build(self) -> BillingAddressDraft {
        self.draft
    }
}

/// Builder for shipping addresses.
pub struct ShippingAddressBuilder {
    draft: ShippingAddressDraft,
}

impl ShippingAddressBuilder {
    pub fn new(
        attention: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            draft: ShippingAddressDraft {
                attention: attention.into(),
                address: address.into(),
                city: city.into(),
                zip: zip.into(),
                country: DEFAULT_COUNTRY.to_string(),
                country_code: DEFAULT_COUNTRY_CODE.to_string(),
                ..ShippingAddressDraft::default()
            },
        }
    }

    pub fn street2(mut self, street2: impl Into<String>) -> Self {
        self.draft.street2 = street2.into();
        self
    }

    pub fn state(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.draft.state = name.into();
        self.draft.state_code = code.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.phone = phone.into();
        self
    }

    pub fn fax(mut self, fax: impl Into<String>) -> Self {
        self.draft.fax = fax.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.draft.email = email.into();
        self
    }

    pub fn build(self) -> ShippingAddressDraft {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_defaults_to_india() {
        let a = BillingAddressBuilder::new("Asha Traders", "12 MG Road", "New Delhi").build();
        assert_eq!(a.country, "India");
        assert_eq!(a.country_code, "IN");
        assert!(a.gst_no.is_empty());
        assert!(a.state.is_empty());
    }

    #[test]
    fn shipping_builder_sets_fields() {
        let a = ShippingAddressBuilder::new("Ravi", "4 Park St", "Kolkata", "700016")
            .state("West Bengal", "WB")
            .phone("9830012345")
            .build();
        assert_eq!(a.zip, "700016");
        assert_eq!(a.state_code, "WB");
        assert_eq!(a.phone, "9830012345");
    }
}
