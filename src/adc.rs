//! Single conversions on the analog inputs the LDRs are wired to.
use avr_device::atmega328p::ADC;
use window_bucket_post::SensorBank;

/// Access to the analog-digital-converter peripheral.
pub struct Adc(ADC);
impl Adc {
    /// Enable the converter with AVcc as the reference voltage.
    ///
    /// The conversion clock has to be in the range of 50kHz to 200kHz for full
    /// 10bit resolution, so the system clock is divided by 128 (`16MHz/128 =
    /// 125kHz`).
    pub fn new(registers: ADC) -> Self {
        registers.admux.write(|w| w.refs().avcc());
        registers
            .adcsra
            .write(|w| w.aden().set_bit().adps().prescaler_128());
        Self(registers)
    }
}

impl SensorBank for Adc {
    /// Convert the voltage on one of the single-ended inputs `ADC0..ADC7`.
    /// Higher channel numbers wrap around.
    fn read(&mut self, channel: u8) -> u16 {
        self.0.admux.modify(|_, w| match channel & 0b111 {
            0 => w.mux().adc0(),
            1 => w.mux().adc1(),
            2 => w.mux().adc2(),
            3 => w.mux().adc3(),
            4 => w.mux().adc4(),
            5 => w.mux().adc5(),
            6 => w.mux().adc6(),
            _ => w.mux().adc7(),
        });

        // the start bit reads as set until the conversion is done
        self.0.adcsra.modify(|_, w| w.adsc().set_bit());
        while self.0.adcsra.read().adsc().bit_is_set() {}

        self.0.adc.read().bits()
    }
}
